//! kiln CLI entry point.
//!
//! Parses arguments, dispatches the command and renders any error as a
//! miette report.

use clap::Parser;
use kiln_cli::{cli, commands, error, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    ui::init_colors(args.no_color);

    commands::execute(args).map_err(error::cli_error_to_miette)
}
