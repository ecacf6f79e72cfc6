//! Resolution errors.
//!
//! Every error is detected synchronously and returned to the caller; none
//! are retried or recovered, and no partial plan is produced.

use std::path::PathBuf;

use kiln_config::{ConfigError, OutputFormat};

/// Error types for descriptor resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Structurally malformed descriptor.
    #[error("invalid descriptor: `{field}` {reason}")]
    InvalidDescriptor { field: String, reason: String },

    /// Two formats produce the same artifact file name.
    #[error("formats '{first}' and '{second}' both produce '{file_name}'")]
    DuplicateArtifact {
        file_name: String,
        first: OutputFormat,
        second: OutputFormat,
    },

    /// An external package lacks a global variable for a non-module format.
    #[error("external '{package}' has no global binding for the '{format}' format")]
    MissingGlobalBinding {
        package: String,
        format: OutputFormat,
    },

    /// A specifier starts with an alias prefix that is not registered.
    #[error("unresolved alias '{prefix}' in '{specifier}'")]
    UnresolvedAlias { specifier: String, prefix: String },

    /// The resolved entry module does not exist.
    #[error("entry not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    /// An alias points at a path that does not exist.
    #[error("alias '{alias}' points to a missing path: {}", .path.display())]
    AliasTargetNotFound { alias: String, path: PathBuf },
}

/// Result type alias for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

impl From<ConfigError> for ResolveError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::SchemaValidation {
                field,
                message,
                hint,
            } => ResolveError::InvalidDescriptor {
                field,
                reason: match hint {
                    Some(hint) => format!("{} ({})", message, hint),
                    None => message,
                },
            },
            other => ResolveError::InvalidDescriptor {
                field: "descriptor".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl miette::Diagnostic for ResolveError {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            ResolveError::InvalidDescriptor { .. } => "kiln::invalid_descriptor",
            ResolveError::DuplicateArtifact { .. } => "kiln::duplicate_artifact",
            ResolveError::MissingGlobalBinding { .. } => "kiln::missing_global_binding",
            ResolveError::UnresolvedAlias { .. } => "kiln::unresolved_alias",
            ResolveError::EntryNotFound { .. } => "kiln::entry_not_found",
            ResolveError::AliasTargetNotFound { .. } => "kiln::alias_target_not_found",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            ResolveError::InvalidDescriptor { .. } => None,
            ResolveError::DuplicateArtifact { .. } => Some(Box::new(
                "Include [format] in the file name template, or give each format its own name.",
            )),
            ResolveError::MissingGlobalBinding { package, .. } => Some(Box::new(format!(
                "Add a global name for it, e.g. globals = {{ \"{}\" = \"...\" }}, or build only the 'es' format.",
                package
            ))),
            ResolveError::UnresolvedAlias { prefix, .. } => Some(Box::new(format!(
                "Register '{}' under [resolve.alias] or use a relative path.",
                prefix
            ))),
            ResolveError::EntryNotFound { .. } => Some(Box::new(
                "Check `library.entry` and the alias it goes through.",
            )),
            ResolveError::AliasTargetNotFound { .. } => Some(Box::new(
                "Alias targets are resolved against the project root; create the directory or fix the path.",
            )),
        }
    }
}
