use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "vscode-profiles")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Sync VS Code profile extensions from a declarative config", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config file (default: ~/.vscode-profiles.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// VS Code executable to run (default: code)
    #[arg(long, global = true, value_name = "BIN")]
    pub code_bin: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install and uninstall extensions so a profile matches the config
    Sync(SyncArgs),

    /// Show what sync would change for a profile
    Diff {
        /// Profile name
        profile: String,
    },

    /// List extensions installed in a profile
    List {
        /// Profile name
        profile: String,
    },

    /// Print a profile's installed extensions as a config snippet
    Export {
        /// Profile name
        profile: String,
    },

    /// Validate the config file (sets, includes, profiles)
    Check,

    /// List VS Code profiles and whether they are configured
    Profiles,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Sync
// ============================================================================

#[derive(Parser)]
pub struct SyncArgs {
    /// Profile to sync
    #[arg(required_unless_present = "all")]
    pub profile: Option<String>,

    /// Sync every profile that is not disabled
    #[arg(short, long, conflicts_with = "profile")]
    pub all: bool,

    /// Dry run - show what would be done
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Number of uninstall passes for extensions other extensions depend on
    #[arg(long, default_value = "3")]
    pub passes: u32,

    /// Stop retrying uninstalls as soon as a pass removes nothing
    #[arg(long)]
    pub stop_on_stall: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sync_requires_profile_or_all() {
        assert!(Cli::try_parse_from(["vscode-profiles", "sync"]).is_err());
        assert!(Cli::try_parse_from(["vscode-profiles", "sync", "work", "--all"]).is_err());

        let cli = Cli::try_parse_from(["vscode-profiles", "sync", "--all", "-n"]).unwrap();
        match cli.command {
            Command::Sync(args) => {
                assert!(args.all);
                assert!(args.dry_run);
                assert_eq!(args.passes, 3);
                assert!(!args.stop_on_stall);
            }
            _ => panic!("expected sync"),
        }
    }

    #[test]
    fn test_global_config_option() {
        let cli =
            Cli::try_parse_from(["vscode-profiles", "diff", "work", "--config", "/tmp/c.yaml"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/c.yaml"));
        assert!(matches!(cli.command, Command::Diff { ref profile } if profile == "work"));
    }
}
