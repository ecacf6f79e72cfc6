//! # kiln-plan
//!
//! Resolves a [`LibraryDescriptor`](kiln_config::LibraryDescriptor) into a
//! [`BuildPlan`]: the absolute entry module, the output directory, one
//! [`Artifact`] per requested format, alias targets, and the plugins to run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kiln_config::discover;
//! use kiln_plan::Resolver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let descriptor = discover()?;
//! let plan = Resolver::new(".").resolve(&descriptor)?;
//!
//! for artifact in &plan.artifacts {
//!     println!("{} -> {}", artifact.format, artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolution order
//!
//! 1. Schema validation
//! 2. Alias targets (when filesystem checks are enabled)
//! 3. Entry module, through the alias map
//! 4. Artifact naming and duplicate detection
//! 5. Global bindings for UMD/IIFE output
//!
//! The first failing step wins; no partial plan is returned.

pub mod alias;
pub mod error;
pub mod plan;
pub mod plugin;
pub mod resolver;

pub use alias::{AliasMap, ALIAS_SIGILS};
pub use error::{ResolveError, Result};
pub use plan::{Artifact, BuildPlan, ExternalBinding, PlannedPlugin};
pub use plugin::{Plugin, PluginError, PluginPipeline, PluginRegistry, SourceTree};
pub use resolver::{resolve, Resolver};
