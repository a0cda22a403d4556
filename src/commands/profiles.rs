use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeSet;

use crate::Context;
use crate::commands;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    let client = commands::client(ctx);
    let editor_profiles = client.list_profiles()?;

    // The config is optional here; without it every profile shows as unmanaged
    let configured: BTreeSet<String> = match commands::load_config(ctx) {
        Ok(config) => config.profiles.into_keys().collect(),
        Err(e) => {
            log::info!("Not reading config: {e:#}");
            BTreeSet::new()
        }
    };

    ui::header("VS Code Profiles");

    if editor_profiles.is_empty() {
        let location = extkit::storage::storage_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "VS Code storage".to_string());
        ui::info(&format!("No profiles found in {location}"));
    }

    for name in &editor_profiles {
        if configured.contains(name) {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {}", "·".dimmed(), format!("{name} (not in config)").dimmed());
        }
    }

    let known: BTreeSet<&str> = editor_profiles.iter().map(String::as_str).collect();
    let missing: Vec<&str> = configured
        .iter()
        .map(String::as_str)
        .filter(|name| !known.contains(name))
        .collect();

    if !missing.is_empty() {
        println!();
        ui::warn(&format!(
            "Configured but not created in VS Code: {}",
            ui::join(&missing)
        ));
    }
    Ok(())
}
