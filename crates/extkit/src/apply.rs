//! Applying a diff to an editor profile.
//!
//! Uninstalls run first, in up to [`UninstallPolicy::max_passes`] passes:
//! an extension that other installed extensions depend on refuses to
//! uninstall until those dependents are gone, so whatever fails in one pass
//! is retried in the next. Extensions that still fail after the last pass
//! are reported, not raised.
//!
//! Installs run afterwards, once each. The first failing install aborts the
//! operation. Nothing is rolled back.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::types::{Diff, ExtensionId, ExtensionSet, UninstallPolicy};

/// Callback trait for apply progress notifications.
pub trait ApplyCallback {
    /// Called when an uninstall fails during a pass.
    ///
    /// # Arguments
    /// * `pass` - Current pass number (1-indexed)
    /// * `max_passes` - Maximum number of passes
    /// * `id` - Extension that could not be uninstalled
    /// * `error` - The error reported by the backend
    fn on_uninstall_failed(&self, _pass: u32, _max_passes: u32, _id: &ExtensionId, _error: &Error) {
    }

    /// Called after each uninstall pass.
    fn on_pass_complete(&self, _pass: u32, _removed: usize, _pending: usize) {}

    /// Called before each install.
    fn on_install(&self, _id: &ExtensionId) {}
}

/// No-op callback that does nothing.
pub struct NoCallback;

impl ApplyCallback for NoCallback {}

/// Callback that reports progress through the `log` facade.
pub struct LogCallback;

impl ApplyCallback for LogCallback {
    fn on_uninstall_failed(&self, pass: u32, max_passes: u32, id: &ExtensionId, error: &Error) {
        log::info!(
            "Pass {}/{}: could not uninstall {}: {}",
            pass,
            max_passes,
            id,
            error
        );
    }

    fn on_pass_complete(&self, pass: u32, removed: usize, pending: usize) {
        log::debug!(
            "Uninstall pass {} removed {}, {} pending",
            pass,
            removed,
            pending
        );
    }

    fn on_install(&self, id: &ExtensionId) {
        log::info!("Installing {}", id);
    }
}

/// Apply a diff to a profile.
///
/// Returns the extensions that could not be uninstalled after every pass.
/// Install failures are returned as errors.
pub fn apply_diff(
    backend: &dyn Backend,
    profile: &str,
    diff: &Diff,
    policy: &UninstallPolicy,
    callback: Option<&dyn ApplyCallback>,
) -> Result<ExtensionSet> {
    let callback = callback.unwrap_or(&NoCallback);

    let failed = uninstall_in_passes(backend, profile, &diff.to_uninstall, policy, callback);
    if !failed.is_empty() {
        log::warn!(
            "{} extension(s) still installed in {} after uninstall passes",
            failed.len(),
            profile
        );
    }

    for id in &diff.to_install {
        callback.on_install(id);
        backend.install(profile, id)?;
    }

    Ok(failed)
}

/// Run uninstall passes until nothing is pending or the policy says stop.
fn uninstall_in_passes(
    backend: &dyn Backend,
    profile: &str,
    to_uninstall: &ExtensionSet,
    policy: &UninstallPolicy,
    callback: &dyn ApplyCallback,
) -> ExtensionSet {
    let max_passes = policy.max_passes.max(1);
    let mut pending = to_uninstall.clone();

    for pass in 1..=max_passes {
        if pending.is_empty() {
            break;
        }

        let mut still_pending = ExtensionSet::new();
        for id in &pending {
            if let Err(e) = backend.uninstall(profile, id) {
                callback.on_uninstall_failed(pass, max_passes, id, &e);
                still_pending.insert(id.clone());
            }
        }

        let removed = pending.len() - still_pending.len();
        callback.on_pass_complete(pass, removed, still_pending.len());
        pending = still_pending;

        if removed == 0 && policy.stop_on_stall {
            log::debug!("Uninstall pass {} made no progress, stopping", pass);
            break;
        }
    }

    pending
}
