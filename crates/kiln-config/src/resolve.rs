//! Import resolution options: path aliases and the dedupe list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Path aliases for import resolution (e.g., "@" → "./src")
    ///
    /// Key: alias prefix (e.g., "@components")
    /// Value: directory path (relative to the project root or absolute)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alias: BTreeMap<String, PathBuf>,

    /// Packages that must resolve to a single copy. Every entry must also be
    /// external.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dedupe: Vec<String>,
}

impl ResolveOptions {
    /// Add a path alias for import resolution
    ///
    /// # Example
    /// ```
    /// use kiln_config::ResolveOptions;
    ///
    /// let resolve = ResolveOptions::default()
    ///     .with_alias("@", "./src")
    ///     .with_alias("@components", "./src/components");
    /// assert_eq!(resolve.alias.len(), 2);
    /// ```
    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.alias.insert(alias.into(), path.into());
        self
    }

    /// Add common aliases relative to a base directory
    ///
    /// - @ → base_dir
    /// - @components → base_dir/components
    /// - @utils → base_dir/utils
    pub fn with_default_aliases(mut self, base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        self.alias.insert("@".to_string(), base.to_path_buf());
        self.alias
            .insert("@components".to_string(), base.join("components"));
        self.alias.insert("@utils".to_string(), base.join("utils"));
        self
    }

    pub fn with_dedupe(mut self, package: impl Into<String>) -> Self {
        self.dedupe.push(package.into());
        self
    }
}
