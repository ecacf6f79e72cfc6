//! Plan command implementation.
//!
//! Loads the layered descriptor, resolves it and prints the plan.

use kiln_plan::Resolver;

use crate::cli::PlanArgs;
use crate::commands::Context;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Execute the plan command.
///
/// With `--json` the plan is written to stdout as pretty JSON and nothing
/// else is printed there; status lines always go to stderr.
pub fn execute(ctx: &Context, args: PlanArgs) -> Result<()> {
    let loaded = config::load(&ctx.root, &args.config, &args.overrides)?;
    ctx.init_logger(loaded.descriptor.settings.log_level.as_deref());

    let plan = Resolver::new(&ctx.root)
        .with_fs_checks(!args.no_fs_check)
        .resolve(&loaded.descriptor)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    ui::print_plan(&plan);
    if !ctx.quiet {
        ui::success(&format!(
            "Resolved {} artifact(s) from {}",
            plan.artifacts.len(),
            loaded.source.display()
        ));
    }
    Ok(())
}
