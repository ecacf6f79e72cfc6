//! Layered descriptor loading for the CLI.
//!
//! Merges the descriptor file, `KILN_*` environment variables and
//! command-line overrides with figment.
//! Priority: CLI > Environment > File (with profile applied) > Defaults

mod loading;
mod tests;

use std::path::PathBuf;

use kiln_config::{LibraryDescriptor, OutputFormat};
use serde::Serialize;

pub use loading::{layer, load, locate};

/// Prefix of environment variables that override descriptor fields.
pub const ENV_PREFIX: &str = "KILN_";

/// Separator between nested keys in environment variable names
/// (`KILN_LIBRARY__OUT_DIR` sets `library.out_dir`).
pub const ENV_SEPARATOR: &str = "__";

/// A descriptor with every layer applied.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub descriptor: LibraryDescriptor,

    /// File the base descriptor came from
    pub source: PathBuf,

    /// Profile merged over the base, if any
    pub profile: Option<String>,
}

/// Command-line overrides in descriptor shape, so figment can merge them.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct CliOverrides {
    pub library: LibraryOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct LibraryOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<OutputFormat>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
}

impl From<&crate::cli::OverrideArgs> for CliOverrides {
    fn from(args: &crate::cli::OverrideArgs) -> Self {
        Self {
            library: LibraryOverrides {
                name: args.name.clone(),
                formats: (!args.formats.is_empty()).then(|| args.formats.clone()),
                out_dir: args.out_dir.clone(),
            },
        }
    }
}
