//! Shared state for command implementations.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::logger::{self, LogOptions};

/// Global flags and the project root every command works against.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
}

impl Context {
    /// Build the context and, when flags or `RUST_LOG` already decide the
    /// level, install logging so descriptor loading is traced too.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let ctx = Self {
            root: resolve_root(cli.cwd.as_deref(), &cwd)?,
            verbose: cli.verbose,
            quiet: cli.quiet,
            no_color: cli.no_color,
        };

        let options = ctx.log_options(None);
        if options.level_is_fixed() {
            logger::init_logger(options);
        }
        Ok(ctx)
    }

    /// Install logging with the descriptor's `settings.log_level`.
    ///
    /// No-op when [`Context::from_cli`] already installed it.
    pub fn init_logger(&self, level: Option<&str>) {
        logger::init_logger(self.log_options(level));
    }

    fn log_options(&self, level: Option<&str>) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            no_color: self.no_color,
            level: level.map(str::to_string),
        }
    }
}

/// Resolve `--cwd` against the process working directory.
pub fn resolve_root(cwd_flag: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let root = match cwd_flag {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => return Ok(cwd.to_path_buf()),
    };

    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--cwd {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}
