use clap::{Args, Subcommand};
use kiln_config::OutputFormat;
use std::path::PathBuf;

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the descriptor and print the build plan
    ///
    /// Shows the entry module, output directory, one line per artifact with
    /// its external globals, and the plugins in execution order.
    Plan(PlanArgs),

    /// Validate the descriptor
    ///
    /// Runs the full resolution, including entry and alias-target checks,
    /// and reports the first problem found.
    Check(CheckArgs),

    /// Create a starter kiln.toml
    Init(InitArgs),
}

/// Where the descriptor comes from and which profile to apply.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to the descriptor (kiln.toml, *.json or package.json)
    ///
    /// Without this flag kiln looks for kiln.toml, then for a `kiln` field
    /// in package.json, in the project root.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile to merge over the base descriptor (e.g. production)
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Command-line overrides. These win over the file and KILN_* variables.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Override `library.name`
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Override `library.formats` (repeat for several)
    ///
    /// Examples:
    ///   kiln plan --format es --format iife
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub formats: Vec<OutputFormat>,

    /// Override `library.out_dir`
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Print the plan as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Skip entry and alias-target existence checks
    #[arg(long)]
    pub no_fs_check: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Check every profile instead of only the base descriptor
    #[arg(long, conflicts_with = "profile")]
    pub all_profiles: bool,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Library name (defaults to the project directory name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite an existing kiln.toml
    #[arg(long)]
    pub force: bool,
}
