//! Command implementations for the kiln CLI.
//!
//! - [`plan`] - Resolve and print the build plan
//! - [`check`] - Validate the descriptor
//! - [`init`] - Write a starter kiln.toml
//!
//! Each command provides an `execute` function taking the shared
//! [`Context`] and its parsed arguments.

pub mod check;
pub mod init;
pub mod plan;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
pub use utils::Context;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Run the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Command::Plan(args) => plan_execute(&ctx, args),
        Command::Check(args) => check_execute(&ctx, args),
        Command::Init(args) => init_execute(&ctx, args),
    }
}
