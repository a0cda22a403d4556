//! CLI command implementations on top of extkit.

pub mod check;
pub mod diff;
pub mod export;
pub mod list;
pub mod profiles;
pub mod sync;

use anyhow::{Context as _, Result};
use extkit::backend::code::CodeBackend;
use extkit::{Client, Config};
use std::path::PathBuf;

use crate::Context;
use crate::paths;

/// Resolve the config path for this invocation.
pub fn config_path(ctx: &Context) -> Result<PathBuf> {
    paths::config_file(ctx.config.as_deref())
}

/// Load the config file for this invocation.
pub fn load_config(ctx: &Context) -> Result<Config> {
    let path = config_path(ctx)?;
    let config = Config::load(&path)?;
    log::info!(
        "Loaded {} sets and {} profiles from {}",
        config.sets.len(),
        config.profiles.len(),
        path.display()
    );
    Ok(config)
}

/// Create a client that runs the configured VS Code executable.
pub fn client(ctx: &Context) -> Client {
    let binary = paths::code_binary(ctx.code_bin.as_deref());
    Client::with_backend(Box::new(CodeBackend::with_binary(binary)))
}

/// List installed extensions, naming the profile on failure.
pub fn list_installed(client: &Client, profile: &str) -> Result<extkit::ExtensionSet> {
    client
        .list(profile)
        .with_context(|| format!("Could not list extensions of profile '{profile}'"))
}
