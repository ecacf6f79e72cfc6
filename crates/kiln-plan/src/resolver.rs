//! Descriptor resolution.
//!
//! Resolution is a pure function of the descriptor and the existence of the
//! entry module and alias targets on disk. It either yields a complete
//! [`BuildPlan`] or the first error; there is no partial result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kiln_config::{validate_schema, LibraryDescriptor, OutputFormat};
use path_clean::PathClean;

use crate::alias::AliasMap;
use crate::error::{ResolveError, Result};
use crate::plan::{Artifact, BuildPlan, ExternalBinding, PlannedPlugin};

/// Resolves descriptors against an injected project root.
///
/// # Example
///
/// ```
/// use kiln_config::{LibraryDescriptor, LibraryOptions, OutputFormat};
/// use kiln_plan::Resolver;
///
/// let descriptor = LibraryDescriptor::new(
///     LibraryOptions::new("src/index.js", "nzhswidgets")
///         .with_formats([OutputFormat::Es, OutputFormat::Iife]),
/// )
/// .with_external("vue", Some("Vue"));
///
/// let plan = Resolver::new("/project")
///     .with_fs_checks(false)
///     .resolve(&descriptor)
///     .unwrap();
///
/// assert_eq!(plan.file_names(), vec!["nzhswidgets.es.js", "nzhswidgets.iife.js"]);
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    fs_checks: bool,
}

impl Resolver {
    /// Resolver rooted at `root`, with filesystem checks enabled.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fs_checks: true,
        }
    }

    /// Toggle the entry and alias-target existence checks.
    ///
    /// Disable them for in-memory or virtual projects.
    pub fn with_fs_checks(mut self, enabled: bool) -> Self {
        self.fs_checks = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs_checks(&self) -> bool {
        self.fs_checks
    }

    /// Turn a descriptor into a validated build plan.
    pub fn resolve(&self, descriptor: &LibraryDescriptor) -> Result<BuildPlan> {
        let library = &descriptor.library;
        let _span = tracing::debug_span!("resolve", name = %library.name).entered();

        validate_schema(descriptor)?;

        let root = self.absolute_root()?;

        let aliases = AliasMap::new(&root, &descriptor.resolve.alias);
        if self.fs_checks {
            aliases.check_targets()?;
        }

        let entry = aliases.resolve(&library.entry, &root)?;
        if self.fs_checks && !entry.exists() {
            return Err(ResolveError::EntryNotFound { path: entry });
        }
        tracing::debug!(entry = %entry.display(), "resolved entry");

        let out_dir = root.join(&library.out_dir).clean();
        let artifacts = plan_artifacts(descriptor, &out_dir)?;
        check_global_bindings(descriptor)?;

        let plan = BuildPlan {
            name: library.name.clone(),
            root,
            entry,
            out_dir,
            aliases,
            dedupe: descriptor.resolve.dedupe.clone(),
            plugins: plan_plugins(descriptor),
            environment: descriptor
                .settings
                .environment
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            artifacts,
        };

        tracing::info!(
            name = %plan.name,
            artifacts = plan.artifacts.len(),
            plugins = plan.plugins.len(),
            "resolved build plan"
        );

        Ok(plan)
    }

    fn absolute_root(&self) -> Result<PathBuf> {
        std::path::absolute(&self.root)
            .map(|root| root.clean())
            .map_err(|err| ResolveError::InvalidDescriptor {
                field: "root".to_string(),
                reason: format!("cannot make {} absolute: {}", self.root.display(), err),
            })
    }
}

/// Resolve `descriptor` against `root` with filesystem checks enabled.
pub fn resolve(descriptor: &LibraryDescriptor, root: impl Into<PathBuf>) -> Result<BuildPlan> {
    Resolver::new(root).resolve(descriptor)
}

fn plan_artifacts(descriptor: &LibraryDescriptor, out_dir: &Path) -> Result<Vec<Artifact>> {
    let library = &descriptor.library;
    // keyed by output path, so differently spelled names for one file collide
    let mut produced: HashMap<PathBuf, OutputFormat> = HashMap::new();
    let mut artifacts = Vec::with_capacity(library.formats.len());

    for &format in &library.formats {
        let file_name = library.file_name.file_name(&library.name, format);
        let path = out_dir.join(&file_name).clean();

        if let Some(&first) = produced.get(&path) {
            return Err(ResolveError::DuplicateArtifact {
                file_name,
                first,
                second: format,
            });
        }
        produced.insert(path.clone(), format);

        let uses_globals = !format.is_module();
        let externals = descriptor
            .external
            .iter()
            .map(|package| ExternalBinding {
                package: package.clone(),
                global: if uses_globals {
                    descriptor.global_for(package).map(str::to_string)
                } else {
                    None
                },
            })
            .collect();

        tracing::debug!(%format, file = %file_name, "planned artifact");
        artifacts.push(Artifact {
            format,
            path,
            file_name,
            uses_globals,
            externals,
        });
    }

    Ok(artifacts)
}

fn check_global_bindings(descriptor: &LibraryDescriptor) -> Result<()> {
    let Some(format) = descriptor
        .library
        .formats
        .iter()
        .copied()
        .find(|format| !format.is_module())
    else {
        return Ok(());
    };

    match descriptor
        .external
        .iter()
        .find(|package| descriptor.global_for(package).is_none())
    {
        Some(package) => Err(ResolveError::MissingGlobalBinding {
            package: package.clone(),
            format,
        }),
        None => Ok(()),
    }
}

fn plan_plugins(descriptor: &LibraryDescriptor) -> Vec<PlannedPlugin> {
    let mut plugins: Vec<PlannedPlugin> = descriptor
        .plugins
        .iter()
        .filter(|plugin| {
            if !plugin.enabled {
                tracing::debug!(plugin = %plugin.name, "skipping disabled plugin");
            }
            plugin.enabled
        })
        .map(|plugin| PlannedPlugin {
            name: plugin.name.clone(),
            order: plugin.order,
            config: plugin.config.clone(),
        })
        .collect();

    // stable: equal orders keep declaration order
    plugins.sort_by_key(|plugin| plugin.order);
    plugins
}
