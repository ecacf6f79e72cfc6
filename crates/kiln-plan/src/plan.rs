//! The build plan produced by resolution.

use std::collections::BTreeMap;
use std::path::PathBuf;

use kiln_config::OutputFormat;
use serde::Serialize;
use serde_json::Value;

use crate::alias::AliasMap;

/// What the host bundler should produce for one descriptor.
///
/// Derived fresh on every resolution; it has no identity beyond the
/// descriptor and filesystem state that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
    /// Library name (global variable for UMD/IIFE output)
    pub name: String,

    /// Project root every relative path was resolved against
    pub root: PathBuf,

    /// Absolute entry module
    pub entry: PathBuf,

    /// Absolute output directory
    pub out_dir: PathBuf,

    /// Declared aliases with absolute targets
    pub aliases: AliasMap,

    /// Packages that must resolve to a single copy
    pub dedupe: Vec<String>,

    /// Enabled plugins in execution order
    pub plugins: Vec<PlannedPlugin>,

    /// Variables forwarded from `settings.environment`
    pub environment: BTreeMap<String, String>,

    /// One artifact per requested format, in request order
    pub artifacts: Vec<Artifact>,
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub format: OutputFormat,

    /// File name relative to the output directory
    pub file_name: String,

    /// Absolute output path
    pub path: PathBuf,

    /// Whether externals are read from global variables (UMD/IIFE)
    pub uses_globals: bool,

    pub externals: Vec<ExternalBinding>,
}

/// How an external package is referenced from an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalBinding {
    pub package: String,

    /// Global variable name; `None` for native module output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPlugin {
    pub name: String,
    pub order: i32,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub config: Value,
}

impl BuildPlan {
    /// Artifact for `format`, if that format was requested.
    pub fn artifact(&self, format: OutputFormat) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.format == format)
    }

    pub fn formats(&self) -> Vec<OutputFormat> {
        self.artifacts.iter().map(|a| a.format).collect()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.file_name.as_str()).collect()
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    /// Externals shared by every artifact.
    pub fn external_packages(&self) -> Vec<&str> {
        self.artifacts
            .first()
            .map(|a| a.externals.iter().map(|e| e.package.as_str()).collect())
            .unwrap_or_default()
    }
}

impl Artifact {
    /// Global variable bound to `package` in this artifact.
    pub fn global_for(&self, package: &str) -> Option<&str> {
        self.externals
            .iter()
            .find(|e| e.package == package)
            .and_then(|e| e.global.as_deref())
    }

    pub fn is_external(&self, package: &str) -> bool {
        self.externals.iter().any(|e| e.package == package)
    }
}
