//! Check command implementation.
//!
//! Validates the descriptor by running a full resolution without printing
//! the plan.

use kiln_config::LibraryDescriptor;
use kiln_plan::{BuildPlan, Resolver};

use crate::cli::{CheckArgs, ConfigArgs, OverrideArgs};
use crate::commands::Context;
use crate::config;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the descriptor (and profile, if given)
/// 2. Resolve it with filesystem checks enabled
/// 3. With `--all-profiles`, reload with each declared profile and repeat
///    step 2. Each profile lands in the file layer, below env and flags.
///
/// The first failure is returned.
pub fn execute(ctx: &Context, args: CheckArgs) -> Result<()> {
    let loaded = config::load(&ctx.root, &args.config, &OverrideArgs::default())?;
    ctx.init_logger(loaded.descriptor.settings.log_level.as_deref());

    let resolver = Resolver::new(&ctx.root);
    let label = loaded.profile.as_deref().unwrap_or("base");
    let plan = check_one(ctx, &resolver, &loaded.descriptor, label)?;

    if !ctx.quiet {
        for plugin in loaded.descriptor.plugins.iter().filter(|p| !p.enabled) {
            ui::warning(&format!("Plugin '{}' is disabled", plugin.name));
        }
    }

    if args.all_profiles {
        for name in loaded.descriptor.profile_names() {
            let profile_args = ConfigArgs {
                config: args.config.config.clone(),
                profile: Some(name.to_string()),
            };
            let profiled = config::load(&ctx.root, &profile_args, &OverrideArgs::default())?;
            check_one(ctx, &resolver, &profiled.descriptor, name)
                .context(format!("Profile '{}'", name))?;
        }
    }

    if !ctx.quiet {
        ui::success(&format!(
            "{} is valid ({} artifact(s), {} plugin(s))",
            loaded.source.display(),
            plan.artifacts.len(),
            plan.plugins.len()
        ));
    }
    Ok(())
}

fn check_one(
    ctx: &Context,
    resolver: &Resolver,
    descriptor: &LibraryDescriptor,
    label: &str,
) -> Result<BuildPlan> {
    let plan = resolver.resolve(descriptor)?;
    if !ctx.quiet {
        let formats: Vec<&str> = plan.formats().iter().map(|f| f.as_str()).collect();
        ui::info(&format!("{}: {}", label, formats.join(", ")));
    }
    Ok(plan)
}
