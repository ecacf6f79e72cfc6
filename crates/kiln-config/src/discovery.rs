//! File-based descriptor discovery for CLI use
//!
//! Handles finding and loading kiln configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::descriptor::LibraryDescriptor;
use crate::error::{ConfigError, Result};

/// Conventional config file name.
pub const CONFIG_FILE: &str = "kiln.toml";

/// Field read from package.json when no kiln.toml exists.
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// File-based descriptor discovery
///
/// Searches for kiln configuration files in conventional locations and loads them.
/// Library users should use `LibraryDescriptor::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let descriptor = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. kiln.toml
    /// 2. package.json (`kiln` field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the descriptor from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<LibraryDescriptor> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_file(&path)
    }

    /// Load the descriptor and merge the named profile over it
    pub fn load_with_profile(&self, profile: &str) -> Result<LibraryDescriptor> {
        self.load()?.materialize_profile(Some(profile))
    }
}

/// Load a descriptor from an explicit file path (TOML or package.json).
pub fn load_file(path: &Path) -> Result<LibraryDescriptor> {
    tracing::debug!(path = %path.display(), "loading descriptor");
    let value = read_value(path)?;
    LibraryDescriptor::from_value(value)
}

/// Read a config file into a JSON value without deserializing it.
///
/// The CLI layers this value under environment and flag overrides.
pub fn read_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return package_json_value(&content);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        }),
        _ => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {}", e)),
                })?;

            serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {}", e)),
            })
        }
    }
}

fn package_json_value(content: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        Some(_) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'kiln' field cannot be null".to_string()),
        }),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'kiln' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load the descriptor from the current directory
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover;
///
/// let descriptor = discover().unwrap();
/// ```
pub fn discover() -> Result<LibraryDescriptor> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load the descriptor with a profile applied
pub fn discover_with_profile(profile: &str) -> Result<LibraryDescriptor> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
