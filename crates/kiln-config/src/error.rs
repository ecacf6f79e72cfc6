//! Error types for descriptor loading and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found (looked for kiln.toml and a `kiln` field in package.json)")]
    NotFound,

    #[error("invalid config value in `{field}`{}", hint_suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("profile `{0}` is not defined")]
    ProfileNotFound(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("invalid `{field}`: {message}{}", hint_suffix(.hint))]
    SchemaValidation {
        field: String,
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::SchemaValidation {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub(crate) fn with_hint(self, text: impl Into<String>) -> Self {
        match self {
            ConfigError::SchemaValidation { field, message, .. } => ConfigError::SchemaValidation {
                field,
                message,
                hint: Some(text.into()),
            },
            ConfigError::InvalidValue { field, .. } => ConfigError::InvalidValue {
                field,
                hint: Some(text.into()),
            },
            other => other,
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(" ({hint})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_mentions_field_and_hint() {
        let err = ConfigError::schema("library.name", "must be a valid identifier")
            .with_hint("use letters, digits, `_` or `$`");
        let msg = err.to_string();
        assert!(msg.contains("`library.name`"));
        assert!(msg.contains("must be a valid identifier"));
        assert!(msg.contains("(use letters"));
    }

    #[test]
    fn invalid_value_without_hint_has_no_suffix() {
        let err = ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value in `toml`");
    }
}
