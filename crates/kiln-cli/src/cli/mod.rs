//! Command-line interface definition for kiln.
//!
//! # Command Structure
//!
//! - `kiln plan` - Resolve the descriptor and print the build plan
//! - `kiln check` - Validate the descriptor without printing the plan
//! - `kiln init` - Write a starter `kiln.toml`

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, InitArgs, OverrideArgs, PlanArgs};

/// kiln - library build descriptor resolver
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve front-end library build descriptors into build plans",
    long_about = "kiln reads a library build descriptor (kiln.toml or the `kiln` field of\n\
                  package.json), validates it and resolves it into a build plan: the entry\n\
                  module, one artifact per output format, external globals, aliases and\n\
                  the plugins a bundler should run."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
