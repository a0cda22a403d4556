mod cli;
mod commands;
mod paths;
mod progress;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
    /// `--config` value, if given
    pub config: Option<String>,
    /// `--code-bin` value, if given
    pub code_bin: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{e:#}"));
        if let Some(hint) = hint(&e) {
            ui::dim(&hint);
        }
        std::process::exit(1);
    }
}

/// Advice for the first extkit error in the chain, if there is one.
fn hint(err: &anyhow::Error) -> Option<String> {
    let category = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<extkit::Error>())?
        .category();
    Some(format!("{}: {}", category.description(), category.advice()))
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        code_bin: cli.code_bin,
    };

    match cli.command {
        Command::Sync(args) => commands::sync::run(&ctx, args),
        Command::Diff { profile } => commands::diff::run(&ctx, &profile),
        Command::List { profile } => commands::list::run(&ctx, &profile),
        Command::Export { profile } => commands::export::run(&ctx, &profile),
        Command::Check => commands::check::run(&ctx),
        Command::Profiles => commands::profiles::run(&ctx),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "vscode-profiles", &mut io::stdout());
            Ok(())
        }
    }
}
