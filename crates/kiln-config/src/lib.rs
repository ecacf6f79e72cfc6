//! Library build descriptors for kiln.
//!
//! A [`LibraryDescriptor`] describes one front-end library build: the entry
//! module, the package name, the output formats and their file names,
//! externalized packages with their global bindings, path aliases and the
//! plugins the host bundler should run. This crate loads descriptors from
//! `kiln.toml` or `package.json`, merges profiles, and validates their
//! structure. Turning a descriptor into a build plan is `kiln-plan`'s job.

pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod identifier;
pub mod library;
pub mod plugin;
pub mod resolve;
pub mod settings;
pub mod validation;

// Re-export main types
pub use descriptor::*;
pub use error::*;
pub use identifier::{is_global_path, is_identifier};
pub use library::*;
pub use plugin::PluginOptions;
pub use resolve::ResolveOptions;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{
    discover, discover_with_profile, load_file, read_value, ConfigDiscovery, CONFIG_FILE,
};
pub use validation::{validate_schema, ConfigValidator, SchemaValidator};
