use anyhow::{Result, bail};
use colored::Colorize;
use extkit::Config;
use std::collections::BTreeSet;

use crate::Context;
use crate::commands;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    let path = commands::config_path(ctx)?;
    let config = commands::load_config(ctx)?;

    ui::header("Config Check");
    ui::kv("File", &path.display().to_string());
    ui::kv("Sets", &config.sets.len().to_string());
    ui::kv("Profiles", &config.profiles.len().to_string());

    let client = commands::client(ctx);
    let editor = if client.is_available() {
        "available".green()
    } else {
        "not found (sync needs the 'code' command)".yellow()
    };
    ui::kv("Editor", &editor.to_string());
    println!();

    let problems = check_profiles(&config);

    for name in unused_sets(&config) {
        ui::warn(&format!("Set '{name}' is not used by any profile"));
    }

    if problems > 0 {
        bail!("{problems} problem(s) found in config");
    }

    // Sets no profile reaches still have to resolve
    config.validate()?;

    println!();
    ui::success("Config is valid");
    Ok(())
}

/// Print each profile's resolution result and return the number of failures.
fn check_profiles(config: &Config) -> usize {
    let mut problems = 0;
    for (name, profile) in &config.profiles {
        match config.resolve_profile(name) {
            Ok(exts) => {
                let suffix = if profile.disabled {
                    format!(" {}", "(disabled)".dimmed())
                } else {
                    String::new()
                };
                println!(
                    "  {} {} - {} extensions{}",
                    "✓".green(),
                    name.bold(),
                    exts.len(),
                    suffix
                );
            }
            Err(e) => {
                problems += 1;
                println!("  {} {} - {}", "✗".red(), name.bold(), e);
            }
        }
    }
    problems
}

/// Sets that no profile reaches, directly or through includes.
fn unused_sets(config: &Config) -> Vec<&str> {
    let mut used = BTreeSet::new();
    let mut stack: Vec<&str> = config
        .profiles
        .values()
        .flat_map(|p| p.sets.iter().map(String::as_str))
        .collect();

    while let Some(name) = stack.pop() {
        if !used.insert(name) {
            continue;
        }
        if let Some(set) = config.set(name) {
            stack.extend(set.includes.iter().map(String::as_str));
        }
    }

    config
        .sets
        .keys()
        .map(String::as_str)
        .filter(|name| !used.contains(name))
        .collect()
}
