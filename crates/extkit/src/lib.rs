//! # extkit
//!
//! Pure Rust library for keeping VS Code profiles in sync with a declarative
//! extension configuration.
//!
//! This crate provides functionality for:
//! - Parsing a YAML config of extension sets and profiles
//! - Resolving set inclusion (with cycle detection) into extension lists
//! - Detecting drift between desired and installed extensions
//! - Applying the drift with multi-pass uninstall retry
//!
//! ## Example
//!
//! ```no_run
//! use extkit::{Client, Config, LogCallback, UninstallPolicy};
//! use std::path::Path;
//!
//! let client = Client::new();
//! let config = Config::load(Path::new("vscode-profiles.yaml")).expect("Failed to load");
//!
//! // Check what would change
//! let plan = client.plan(&config, "work").expect("Failed to diff");
//! for ext in &plan.diff.to_install {
//!     println!("+ {ext}");
//! }
//!
//! // Apply it
//! let report = client
//!     .sync_plan(plan, &UninstallPolicy::default(), false, &LogCallback)
//!     .expect("Sync failed");
//! for ext in &report.failed_uninstalls {
//!     println!("still installed: {ext}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod apply;
pub mod backend;
pub mod config;
pub mod diff;
pub mod error;
pub mod resolve;
pub mod storage;
pub mod types;

pub use apply::{ApplyCallback, LogCallback, NoCallback, apply_diff};
pub use config::{Config, ProfileDefinition, SetDefinition};
pub use diff::compute_diff;
pub use error::{Error, ErrorCategory, Result};
pub use resolve::{resolve_profile_extensions, resolve_set_extensions};
pub use types::{Diff, ExtensionId, ExtensionSet, SyncReport, UninstallPolicy};

use backend::{Backend, code::CodeBackend};

/// Desired and installed extensions of a profile, and the diff between them.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Profile the plan is for
    pub profile: String,
    /// Extensions the config asks for
    pub desired: ExtensionSet,
    /// Extensions currently installed
    pub current: ExtensionSet,
    /// Changes needed
    pub diff: Diff,
}

/// High-level client for profile operations.
///
/// The client wraps a backend and combines resolution, diffing and applying
/// into the operations the CLI exposes.
pub struct Client {
    backend: Box<dyn Backend>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create a new Client running the `code` binary from PATH.
    pub fn new() -> Self {
        Self::with_backend(Box::new(CodeBackend::new()))
    }

    /// Create a client with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Check if the editor is available.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// List the extensions installed in a profile.
    pub fn list(&self, profile: &str) -> Result<ExtensionSet> {
        self.backend.list_installed(profile)
    }

    /// List the profiles the editor knows about.
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        self.backend.list_profiles()
    }

    /// Render the installed extensions of a profile as a config snippet.
    pub fn export(&self, profile: &str) -> Result<String> {
        let installed = self.backend.list_installed(profile)?;
        config::write_profile(profile, &installed)
    }

    /// Compute what syncing a profile would change.
    ///
    /// The config is resolved before the editor is queried, so config errors
    /// surface without running any editor command.
    pub fn plan(&self, config: &Config, profile: &str) -> Result<Plan> {
        let desired = config.resolve_profile(profile)?;
        let current = self.backend.list_installed(profile)?;
        let diff = compute_diff(&desired, &current);

        Ok(Plan {
            profile: profile.to_string(),
            desired,
            current,
            diff,
        })
    }

    /// Apply a plan, or only report it when `dry_run` is set.
    ///
    /// Failed uninstalls end up in the report; a failed install is an error.
    pub fn sync_plan(
        &self,
        plan: Plan,
        policy: &UninstallPolicy,
        dry_run: bool,
        callback: &dyn ApplyCallback,
    ) -> Result<SyncReport> {
        let mut report = SyncReport {
            profile: plan.profile,
            diff: plan.diff,
            failed_uninstalls: ExtensionSet::new(),
            dry_run,
        };

        if dry_run || !report.diff.has_changes() {
            return Ok(report);
        }

        report.failed_uninstalls = apply_diff(
            self.backend.as_ref(),
            &report.profile,
            &report.diff,
            policy,
            Some(callback),
        )?;
        Ok(report)
    }
}
