use anyhow::{Context as _, Result, bail};
use extkit::{ApplyCallback, Client, Config, Error, ExtensionId, LogCallback, UninstallPolicy};
use indicatif::ProgressBar;

use crate::Context;
use crate::cli::SyncArgs;
use crate::commands;
use crate::progress;
use crate::ui;

pub fn run(ctx: &Context, args: SyncArgs) -> Result<()> {
    let config = commands::load_config(ctx)?;

    let targets: Vec<String> = match (args.all, args.profile) {
        (true, _) => config
            .enabled_profiles()
            .into_iter()
            .map(str::to_string)
            .collect(),
        (false, Some(profile)) => vec![profile],
        (false, None) => bail!("Provide a profile name or use --all"),
    };

    if targets.is_empty() {
        ui::warn("No enabled profiles in config");
        return Ok(());
    }

    let policy = UninstallPolicy::new(args.passes, args.stop_on_stall);
    let client = commands::client(ctx);
    sync_profiles(ctx, &client, &config, &targets, &policy, args.dry_run)
}

/// Sync profiles one after another, stopping at the first error.
fn sync_profiles(
    ctx: &Context,
    client: &Client,
    config: &Config,
    targets: &[String],
    policy: &UninstallPolicy,
    dry_run: bool,
) -> Result<()> {
    let total = targets.len();
    for (i, profile) in targets.iter().enumerate() {
        if total > 1 {
            ui::step(i + 1, total, &format!("Syncing profile: {profile}"));
        } else {
            ui::header(&format!("Syncing profile: {profile}"));
        }

        sync_one(ctx, client, config, profile, policy, dry_run)
            .with_context(|| format!("Failed to sync profile '{profile}'"))?;
    }
    Ok(())
}

fn sync_one(
    ctx: &Context,
    client: &Client,
    config: &Config,
    profile: &str,
    policy: &UninstallPolicy,
    dry_run: bool,
) -> Result<()> {
    let pb = progress::spinner("Comparing installed extensions...");
    let plan = client.plan(config, profile);
    progress::finish_clear(&pb);
    let plan = plan?;

    if ctx.verbose > 0 {
        ui::dim(&format!(
            "{} desired, {} installed",
            plan.desired.len(),
            plan.current.len()
        ));
    }

    let diff = &plan.diff;
    if !diff.has_changes() {
        ui::success("No changes needed");
        return Ok(());
    }

    if !ctx.quiet {
        if !diff.to_install.is_empty() {
            ui::kv("Installing", &ui::join(&diff.to_install));
        }
        if !diff.to_uninstall.is_empty() {
            ui::kv("Uninstalling", &ui::join(&diff.to_uninstall));
        }
    }

    let pb = (!dry_run).then(|| progress::spinner("Applying changes..."));
    let callback = SpinnerCallback { pb: pb.as_ref() };
    let result = client.sync_plan(plan, policy, dry_run, &callback);
    if let Some(pb) = &pb {
        progress::finish_clear(pb);
    }
    let report = result?;

    if report.dry_run {
        ui::info("Dry run - no changes applied");
    } else if report.is_success() {
        ui::success(&format!("Done ({} changes)", report.diff.total()));
    } else {
        let failed = &report.failed_uninstalls;
        ui::warn(&format!(
            "Failed to uninstall (dependencies?): {}",
            ui::join(failed)
        ));
        ui::success(&format!(
            "Done ({} changes)",
            report.diff.total() - failed.len()
        ));
    }
    Ok(())
}

/// Shows apply progress on a spinner and forwards to the log.
struct SpinnerCallback<'a> {
    pb: Option<&'a ProgressBar>,
}

impl ApplyCallback for SpinnerCallback<'_> {
    fn on_uninstall_failed(&self, pass: u32, max_passes: u32, id: &ExtensionId, error: &Error) {
        if let Some(pb) = self.pb {
            pb.set_message(format!("Uninstall pass {pass}/{max_passes}: {id} not removed yet"));
        }
        LogCallback.on_uninstall_failed(pass, max_passes, id, error);
    }

    fn on_pass_complete(&self, pass: u32, removed: usize, pending: usize) {
        LogCallback.on_pass_complete(pass, removed, pending);
    }

    fn on_install(&self, id: &ExtensionId) {
        if let Some(pb) = self.pb {
            pb.set_message(format!("Installing {id}..."));
        }
        LogCallback.on_install(id);
    }
}
