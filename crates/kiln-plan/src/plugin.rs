//! Plugin capability interface.
//!
//! The resolver only records which plugins a build needs. Running them is up
//! to the host: it registers implementations by name and builds a
//! [`PluginPipeline`] from the plan, which applies each plugin to the source
//! tree in plan order.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use crate::plan::BuildPlan;

/// Module sources keyed by path, as handed between plugins.
pub type SourceTree = BTreeMap<PathBuf, String>;

/// A source-tree transformation run by the host bundler.
///
/// # Thread Safety
///
/// Plugins must be `Send + Sync` so a host can share one registry between
/// builds.
pub trait Plugin: Send + Sync {
    /// Name used in descriptors (e.g. "vue") and in logs.
    fn name(&self) -> &str;

    /// Transform the source tree.
    ///
    /// The default implementation returns the tree unchanged.
    fn transform(&self, tree: SourceTree) -> anyhow::Result<SourceTree> {
        Ok(tree)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The plan names a plugin the host never registered.
    #[error("plugin '{0}' is not registered")]
    NotRegistered(String),

    /// A plugin's transform failed.
    #[error("plugin '{plugin}' failed: {source}")]
    Failed {
        plugin: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Plugin implementations available to the host, keyed by name.
#[derive(Default, Clone)]
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under its own name, replacing any previous one.
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        self.plugins
            .insert(plugin.name().to_string(), Arc::new(plugin));
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }
}

/// Plugins selected by a plan, in execution order.
pub struct PluginPipeline {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginPipeline {
    /// Look up every planned plugin in `registry`.
    pub fn from_plan(plan: &BuildPlan, registry: &PluginRegistry) -> Result<Self, PluginError> {
        let plugins = plan
            .plugins
            .iter()
            .map(|planned| {
                registry
                    .get(&planned.name)
                    .ok_or_else(|| PluginError::NotRegistered(planned.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { plugins })
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Apply every plugin in order, stopping at the first failure.
    pub fn run(&self, mut tree: SourceTree) -> Result<SourceTree, PluginError> {
        for plugin in &self.plugins {
            tracing::debug!(plugin = plugin.name(), "running plugin");
            tree = plugin
                .transform(tree)
                .map_err(|source| PluginError::Failed {
                    plugin: plugin.name().to_string(),
                    source,
                })?;
        }
        Ok(tree)
    }
}
