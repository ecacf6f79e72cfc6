//! Library target options: what gets built and how artifacts are named.

mod format;
pub(crate) mod helpers;
mod naming;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use format::OutputFormat;
pub use naming::{FileNaming, PerFormatNames, PLACEHOLDERS};

pub(crate) use naming::unknown_placeholders;

use helpers::{default_formats, default_out_dir};

/// Library build target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryOptions {
    /// Entry module. May start with a path alias (e.g. `@/index.js`).
    #[serde(default)]
    pub entry: String,

    /// Package name: the global variable for UMD/IIFE output and the
    /// `[name]` placeholder in file names
    #[serde(default)]
    pub name: String,

    /// File name template(s)
    #[serde(default)]
    pub file_name: FileNaming,

    /// Requested output formats, in build order
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,

    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            entry: String::new(),
            name: String::new(),
            file_name: FileNaming::default(),
            formats: default_formats(),
            out_dir: default_out_dir(),
        }
    }
}

impl LibraryOptions {
    /// Start a library target from an entry and a name, with default
    /// formats (`es`, `umd`) and file names.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{LibraryOptions, OutputFormat};
    ///
    /// let library = LibraryOptions::new("src/index.js", "nzhswidgets")
    ///     .with_formats([OutputFormat::Es, OutputFormat::Umd, OutputFormat::Iife]);
    /// assert_eq!(library.formats.len(), 3);
    /// ```
    pub fn new(entry: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_formats(mut self, formats: impl IntoIterator<Item = OutputFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    pub fn with_file_name(mut self, naming: FileNaming) -> Self {
        self.file_name = naming;
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }
}
