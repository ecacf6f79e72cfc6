use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Serialized},
    Figment, Provider,
};
use kiln_config::{ConfigDiscovery, ConfigError, LibraryDescriptor};

use crate::cli::{ConfigArgs, OverrideArgs};
use crate::config::{CliOverrides, LoadedConfig, ENV_PREFIX, ENV_SEPARATOR};
use crate::error::{CliError, Result, ResultExt};

/// Load the descriptor for `root` with every layer applied.
///
/// The profile is merged into the file layer, so environment variables and
/// flags still win over profile values.
pub fn load(root: &Path, config: &ConfigArgs, overrides: &OverrideArgs) -> Result<LoadedConfig> {
    let source = locate(root, config.config.as_deref())?;
    tracing::debug!(path = %source.display(), "loading descriptor");

    let base = kiln_config::load_file(&source)
        .with_path(&source)?
        .materialize_profile(config.profile.as_deref())?;

    let descriptor = layer(
        base,
        Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR),
        overrides,
    )?;

    Ok(LoadedConfig {
        descriptor,
        source,
        profile: config.profile.clone(),
    })
}

/// Find the descriptor file: `--config` relative to `root`, or discovery.
pub fn locate(root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = root.join(path);
            if path.is_file() {
                Ok(path)
            } else {
                Err(CliError::FileNotFound(path))
            }
        }
        None => ConfigDiscovery::new(root)
            .find()
            .ok_or(CliError::Config(ConfigError::NotFound)),
    }
}

/// Merge `env` and the command-line overrides over `base`.
pub fn layer(
    base: LibraryDescriptor,
    env: impl Provider,
    overrides: &OverrideArgs,
) -> Result<LibraryDescriptor> {
    let descriptor = Figment::new()
        .merge(Serialized::defaults(base))
        .merge(env)
        .merge(Serialized::defaults(CliOverrides::from(overrides)))
        .extract()?;

    Ok(descriptor)
}
