//! The top-level library descriptor and profile merging.
//!
//! For file discovery, see the `discovery` module.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::library::LibraryOptions;
use crate::plugin::PluginOptions;
use crate::resolve::ResolveOptions;
use crate::settings::GlobalSettings;

/// Static description of a library build: entry, name, formats, externals,
/// aliases and plugins. Immutable once loaded; the resolver turns it into a
/// build plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDescriptor {
    #[serde(default)]
    pub library: LibraryOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Packages excluded from the bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<String>,

    /// Global variable names for externals in UMD/IIFE output
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginOptions>,

    /// Named partial descriptors merged over this one
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl LibraryDescriptor {
    pub fn new(library: LibraryOptions) -> Self {
        Self {
            library,
            ..Self::default()
        }
    }

    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{LibraryDescriptor, OutputFormat};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "library": {
    ///         "entry": "src/index.js",
    ///         "name": "nzhswidgets",
    ///         "formats": ["es", "umd", "iife"]
    ///     },
    ///     "external": ["vue"],
    ///     "globals": { "vue": "Vue" }
    /// });
    ///
    /// let descriptor = LibraryDescriptor::from_value(value).unwrap();
    /// assert_eq!(descriptor.library.formats[2], OutputFormat::Iife);
    /// assert_eq!(descriptor.global_for("vue"), Some("Vue"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Mark `package` as external, optionally bound to a global variable.
    pub fn with_external(mut self, package: impl Into<String>, global: Option<&str>) -> Self {
        let package = package.into();
        if let Some(global) = global {
            self.globals.insert(package.clone(), global.to_string());
        }
        if !self.external.contains(&package) {
            self.external.push(package);
        }
        self
    }

    pub fn with_resolve(mut self, resolve: ResolveOptions) -> Self {
        self.resolve = resolve;
        self
    }

    pub fn with_plugin(mut self, plugin: PluginOptions) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Global variable bound to an external package, if any.
    pub fn global_for(&self, package: &str) -> Option<&str> {
        self.globals.get(package).map(String::as_str)
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl LibraryDescriptor {
    /// Merge the named profile over the base descriptor.
    ///
    /// Objects merge key by key; arrays and scalars in the profile replace
    /// the base value. Plugin-level `profiles` entries apply afterwards.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if !overrides.is_null() {
            let profiles = std::mem::take(&mut self.profiles);
            let mut base =
                serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                    message: err.to_string(),
                })?;
            merge_values(&mut base, &overrides);
            self = serde_json::from_value(base).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: format!("profile `{}`: {}", name, err),
                }
            })?;
            self.profiles = profiles;
        }

        apply_plugin_profiles(&mut self.plugins, name)?;
        tracing::debug!(profile = name, "materialized profile");

        Ok(self)
    }
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

fn apply_plugin_profiles(plugins: &mut [PluginOptions], profile: &str) -> ConfigResult<()> {
    for plugin in plugins {
        let Some(overrides) = plugin.profiles.get(profile).cloned() else {
            continue;
        };

        if overrides.is_null() {
            continue;
        }

        let original_profiles = std::mem::take(&mut plugin.profiles);
        let mut merged =
            serde_json::to_value(&*plugin).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut merged, &overrides);
        let mut updated: PluginOptions =
            serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
                message: format!("plugin `{}`: {}", plugin.name, err),
            })?;
        updated.profiles = original_profiles;
        *plugin = updated;
    }

    Ok(())
}
