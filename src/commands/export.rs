use anyhow::{Context as _, Result};

use crate::Context;
use crate::commands;

/// Print the profile as a config snippet on stdout, with no decoration so it
/// can be redirected into a file.
pub fn run(ctx: &Context, profile: &str) -> Result<()> {
    let client = commands::client(ctx);
    let snippet = client
        .export(profile)
        .with_context(|| format!("Could not export profile '{profile}'"))?;

    print!("{snippet}");
    Ok(())
}
