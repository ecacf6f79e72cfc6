//! Human-readable build plan output.

use std::fmt::Write as _;

use kiln_plan::BuildPlan;
use owo_colors::Style;

use super::messages::paint;

/// Render `plan` as an indented summary.
///
/// Paths are shown relative to the project root when possible.
pub fn format_plan(plan: &BuildPlan) -> String {
    let relative = |path: &std::path::Path| {
        path.strip_prefix(&plan.root)
            .unwrap_or(path)
            .display()
            .to_string()
    };
    let heading = Style::new().bold();
    let dim = Style::new().dimmed();

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", paint("library", heading), plan.name);
    let _ = writeln!(out, "  root     {}", plan.root.display());
    let _ = writeln!(out, "  entry    {}", relative(&plan.entry));
    let _ = writeln!(out, "  out_dir  {}", relative(&plan.out_dir));

    let _ = writeln!(out, "{}", paint("artifacts", heading));
    let width = plan
        .artifacts
        .iter()
        .map(|a| a.file_name.len())
        .max()
        .unwrap_or(0);
    for artifact in &plan.artifacts {
        let _ = write!(
            out,
            "  {:<5} {:<width$}",
            artifact.format.as_str(),
            artifact.file_name,
            width = width
        );
        let bindings: Vec<String> = artifact
            .externals
            .iter()
            .map(|binding| match &binding.global {
                Some(global) => format!("{} -> {}", binding.package, global),
                None => binding.package.clone(),
            })
            .collect();
        if !bindings.is_empty() {
            let _ = write!(out, "  {}", paint(&bindings.join(", "), dim));
        }
        out.push('\n');
    }

    if !plan.aliases.is_empty() {
        let _ = writeln!(out, "{}", paint("aliases", heading));
        for (alias, target) in plan.aliases.iter() {
            let _ = writeln!(out, "  {} -> {}", alias, relative(target));
        }
    }

    if !plan.dedupe.is_empty() {
        let _ = writeln!(out, "{} {}", paint("dedupe", heading), plan.dedupe.join(", "));
    }

    if !plan.plugins.is_empty() {
        let _ = writeln!(out, "{}", paint("plugins", heading));
        for plugin in &plan.plugins {
            let order = format!("(order {})", plugin.order);
            let _ = writeln!(out, "  {} {}", plugin.name, paint(&order, dim));
        }
    }

    if !plan.environment.is_empty() {
        let _ = writeln!(out, "{}", paint("environment", heading));
        for (key, value) in &plan.environment {
            let _ = writeln!(out, "  {}={}", key, value);
        }
    }

    out
}

/// Print the plan summary to stdout.
pub fn print_plan(plan: &BuildPlan) {
    print!("{}", format_plan(plan));
}
