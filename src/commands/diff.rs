use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::Context;
use crate::commands;
use crate::progress;
use crate::ui;

pub fn run(ctx: &Context, profile: &str) -> Result<()> {
    let config = commands::load_config(ctx)?;
    let client = commands::client(ctx);

    let pb = progress::spinner(&format!("Comparing {profile}..."));
    let plan = client.plan(&config, profile);
    progress::finish_clear(&pb);
    let plan = plan.with_context(|| format!("Could not diff profile '{profile}'"))?;

    let diff = &plan.diff;
    if !diff.has_changes() {
        ui::success(&format!("Profile '{profile}' is in sync"));
        return Ok(());
    }

    if !diff.to_install.is_empty() {
        println!("{}", "To install:".green().bold());
        for ext in &diff.to_install {
            ui::added(ext.as_str());
        }
    }

    if !diff.to_uninstall.is_empty() {
        println!("{}", "To uninstall:".red().bold());
        for ext in &diff.to_uninstall {
            ui::removed(ext.as_str());
        }
    }

    if !ctx.quiet {
        println!();
        ui::dim(&format!(
            "{} to install, {} to uninstall. Run 'vscode-profiles sync {profile}' to apply.",
            diff.to_install.len(),
            diff.to_uninstall.len()
        ));
    }
    Ok(())
}
