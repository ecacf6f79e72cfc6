//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use ::miette::Report;
use kiln_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Resolve(e) => Report::new(e),
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Layering(e) => ::miette::miette!(
            help = "KILN_* variables use `__` between keys, e.g. KILN_LIBRARY__NAME=widgets",
            "Configuration error: {}",
            e
        ),
        CliError::FileNotFound(path) => ::miette::miette!(
            help = "Pass --config <PATH> or run `kiln init`",
            "File not found: {}",
            path.display()
        ),
        other => ::miette::miette!("{}", other),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => ::miette::miette!(
            code = "kiln::config_not_found",
            help = "Run `kiln init` to create a kiln.toml, or pass --config <PATH>",
            "{}",
            err
        ),
        ConfigError::ProfileNotFound(_) => ::miette::miette!(
            code = "kiln::profile_not_found",
            help = "Profiles are declared under [profiles.<name>] in kiln.toml",
            "{}",
            err
        ),
        ConfigError::SchemaValidation { .. } => {
            ::miette::miette!(code = "kiln::invalid_descriptor", "{}", err)
        }
        _ => ::miette::miette!("Configuration error: {}", err),
    }
}
