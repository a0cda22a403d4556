use anyhow::Result;

use crate::Context;
use crate::commands;
use crate::ui;

pub fn run(ctx: &Context, profile: &str) -> Result<()> {
    let client = commands::client(ctx);
    let extensions = commands::list_installed(&client, profile)?;

    if extensions.is_empty() {
        ui::info(&format!("No extensions installed in profile '{profile}'"));
        return Ok(());
    }

    for ext in &extensions {
        println!("{ext}");
    }
    Ok(())
}
