//! Error handling for the kiln CLI.
//!
//! `CliError` wraps the library errors (`kiln_config::ConfigError`,
//! `kiln_plan::ResolveError`) and the failures that only happen at the
//! command line. Conversion is automatic via `#[from]`.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_descriptor(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run `kiln init` to create one")
//! }
//! ```

use std::path::PathBuf;

use kiln_config::ConfigError;
use kiln_plan::ResolveError;
use thiserror::Error;

pub mod miette;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Descriptor loading and schema errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Descriptor resolution errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Layered configuration could not be merged or extracted
    #[error("Configuration error: {0}")]
    Layering(#[from] Box<figment::Error>),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Layering(Box::new(err))
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Config(ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::OutputFormat;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().contains("kiln.toml"));
    }

    #[test]
    fn test_resolve_error_is_transparent() {
        let cli_err: CliError = ResolveError::MissingGlobalBinding {
            package: "vue".to_string(),
            format: OutputFormat::Umd,
        }
        .into();
        assert_eq!(
            cli_err.to_string(),
            "external 'vue' has no global binding for the 'umd' format"
        );
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/kiln.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p.ends_with("kiln.toml")));
    }

    #[test]
    fn test_result_ext_with_path_through_config_error() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::Io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));

        let err = result.with_path("custom.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NotFound);

        let err = result.with_hint("Run `kiln init`").unwrap_err();
        assert!(err.to_string().contains("Hint: Run `kiln init`"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::ProfileNotFound("staging".to_string()));

        let err = result.context("Failed to load descriptor").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to load descriptor: "));
        assert!(msg.contains("staging"));
    }
}
