use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::library::helpers::default_true;

/// A bundler plugin the host should run (e.g. `vue`, `vue-devtools`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Plugin identifier, looked up by the host's plugin registry
    pub name: String,

    /// Whether the plugin should be loaded
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Execution order (lower values run earlier)
    #[serde(default)]
    pub order: i32,

    /// Plugin-specific configuration forwarded to the plugin untouched
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub config: Value,

    /// Profile-specific overrides, merged when a profile is materialized
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl PluginOptions {
    /// Enabled plugin with default order and no configuration.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            order: 0,
            config: Value::Null,
            profiles: HashMap::new(),
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }
}
