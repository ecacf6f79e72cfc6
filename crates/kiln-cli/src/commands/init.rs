//! Init command implementation.
//!
//! Writes a starter `kiln.toml` for a Vue widget library and a stub entry
//! module, so `kiln check` passes right away.

use std::fs;
use std::path::Path;

use kiln_config::{is_identifier, CONFIG_FILE};

use crate::cli::InitArgs;
use crate::commands::Context;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

const ENTRY: &str = "src/index.js";

/// Execute the init command.
///
/// # Process
///
/// 1. Determine the library name (flag or directory name)
/// 2. Refuse to overwrite kiln.toml unless `--force`
/// 3. Write kiln.toml
/// 4. Create `src/index.js` if it does not exist
pub fn execute(ctx: &Context, args: InitArgs) -> Result<()> {
    ctx.init_logger(None);

    let name = determine_library_name(&args, &ctx.root)?;
    let config_path = ctx.root.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists in {} (use --force to overwrite)",
            CONFIG_FILE,
            ctx.root.display()
        )));
    }

    fs::write(&config_path, starter_config(&name)).with_path(&config_path)?;
    tracing::debug!(path = %config_path.display(), "wrote descriptor");
    if !ctx.quiet {
        ui::success(&format!("Created {}", config_path.display()));
    }

    let entry = ctx.root.join(ENTRY);
    if !entry.exists() {
        if let Some(parent) = entry.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&entry, starter_entry(&name)).with_path(&entry)?;
        if !ctx.quiet {
            ui::success(&format!("Created {}", ENTRY));
        }
    }

    if !ctx.quiet {
        ui::info("Next: run `kiln plan` to see the build plan");
    }
    Ok(())
}

/// Library name from `--name`, or derived from the directory name.
fn determine_library_name(args: &InitArgs, root: &Path) -> Result<String> {
    if let Some(name) = &args.name {
        if !is_identifier(name) {
            return Err(CliError::InvalidArgument(format!(
                "library name '{}' is not a valid JavaScript identifier",
                name
            )));
        }
        return Ok(name.clone());
    }

    let dir_name = root.file_name().and_then(|n| n.to_str()).unwrap_or("");
    Ok(identifier_from(dir_name))
}

/// Turn a directory name such as `nzhs-widgets` into `nzhsWidgets`.
pub(crate) fn identifier_from(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    let mut upper_next = false;

    for c in raw.chars() {
        if c.is_alphanumeric() || c == '_' || c == '$' {
            if upper_next && !name.is_empty() {
                name.extend(c.to_uppercase());
            } else {
                name.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    if is_identifier(&name) {
        name
    } else if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    {
        format!("_{}", name)
    } else {
        "library".to_string()
    }
}

fn starter_config(name: &str) -> String {
    format!(
        r#"# kiln library descriptor
external = ["vue"]

[library]
entry = "{entry}"
name = "{name}"
formats = ["es", "umd", "iife"]
file_name = "[name].[format].js"
out_dir = "dist"

[globals]
vue = "Vue"

[resolve.alias]
"@" = "./src"

[[plugins]]
name = "vue"

[profiles.production.library]
out_dir = "dist/prod"
"#,
        entry = ENTRY,
        name = name
    )
}

fn starter_entry(name: &str) -> String {
    format!(
        "// Entry module for {name}\nexport default {{\n  install(app) {{}},\n}};\n"
    )
}
