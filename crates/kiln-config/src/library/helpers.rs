use std::path::PathBuf;

use super::OutputFormat;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Es, OutputFormat::Umd]
}

pub(crate) fn default_file_pattern() -> String {
    "[name].[format].js".to_string()
}
