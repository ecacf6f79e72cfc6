//! Artifact file naming.
//!
//! A file name is a pure function of the library name and the output format.
//! Templates may use the `[name]` and `[format]` placeholders.

use serde::{Deserialize, Serialize};

use super::OutputFormat;
use super::helpers::default_file_pattern;

/// Placeholders understood by file name templates.
pub const PLACEHOLDERS: [&str; 2] = ["[name]", "[format]"];

/// How artifact file names are derived from the library name and format.
///
/// Deserializes from either a template string or a table:
///
/// ```toml
/// file_name = "[name].[format].js"
///
/// # or
/// [library.file_name]
/// pattern = "[name].[format].js"
/// es = "[name].mjs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileNaming {
    /// One template for every format
    Pattern(String),
    /// Explicit templates per format, falling back to `pattern`
    PerFormat(PerFormatNames),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerFormatNames {
    #[serde(default = "default_file_pattern")]
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iife: Option<String>,
}

impl Default for FileNaming {
    fn default() -> Self {
        FileNaming::Pattern(default_file_pattern())
    }
}

impl FileNaming {
    /// Template used for `format`. Defined for every format.
    pub fn template(&self, format: OutputFormat) -> &str {
        match self {
            FileNaming::Pattern(pattern) => pattern,
            FileNaming::PerFormat(names) => {
                let specific = match format {
                    OutputFormat::Es => names.es.as_deref(),
                    OutputFormat::Umd => names.umd.as_deref(),
                    OutputFormat::Iife => names.iife.as_deref(),
                };
                specific.unwrap_or(&names.pattern)
            }
        }
    }

    /// Every distinct template this naming can produce, in format order.
    pub fn templates(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for format in OutputFormat::ALL {
            let template = self.template(format);
            if !seen.contains(&template) {
                seen.push(template);
            }
        }
        seen
    }

    /// Produce the artifact file name for `format`.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{FileNaming, OutputFormat};
    ///
    /// let naming = FileNaming::default();
    /// assert_eq!(naming.file_name("nzhswidgets", OutputFormat::Umd), "nzhswidgets.umd.js");
    /// ```
    pub fn file_name(&self, name: &str, format: OutputFormat) -> String {
        self.template(format)
            .replace("[name]", name)
            .replace("[format]", format.as_str())
    }
}

/// Bracketed tokens in `template` that are not known placeholders.
pub(crate) fn unknown_placeholders(template: &str) -> Vec<String> {
    let mut unknown = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('[') {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        let token = &rest[start..start + len + 1];
        if !PLACEHOLDERS.contains(&token) {
            unknown.push(token.to_string());
        }
        rest = &rest[start + len + 1..];
    }

    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_matches_name_and_format() {
        let naming = FileNaming::default();
        assert_eq!(naming.file_name("lib", OutputFormat::Es), "lib.es.js");
        assert_eq!(naming.file_name("lib", OutputFormat::Iife), "lib.iife.js");
    }

    #[test]
    fn per_format_falls_back_to_pattern() {
        let naming = FileNaming::PerFormat(PerFormatNames {
            pattern: "[name].[format].cjs".to_string(),
            es: Some("[name].mjs".to_string()),
            umd: None,
            iife: None,
        });
        assert_eq!(naming.file_name("lib", OutputFormat::Es), "lib.mjs");
        assert_eq!(naming.file_name("lib", OutputFormat::Umd), "lib.umd.cjs");
        assert_eq!(naming.templates(), vec!["[name].mjs", "[name].[format].cjs"]);
    }

    #[test]
    fn deserializes_from_string_or_table() {
        let naming: FileNaming = serde_json::from_str("\"[name].js\"").unwrap();
        assert_eq!(naming, FileNaming::Pattern("[name].js".to_string()));

        let naming: FileNaming = serde_json::from_str(r#"{"iife": "[name].min.js"}"#).unwrap();
        assert_eq!(naming.file_name("w", OutputFormat::Iife), "w.min.js");
        assert_eq!(naming.file_name("w", OutputFormat::Es), "w.es.js");
    }

    #[test]
    fn finds_unknown_placeholders() {
        assert!(unknown_placeholders("[name].[format].js").is_empty());
        assert_eq!(unknown_placeholders("[name].[hash].js"), vec!["[hash]"]);
        assert!(unknown_placeholders("weird[").is_empty());
    }
}
