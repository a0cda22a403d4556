//! Core types for extension set synchronization.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Case-insensitive VS Code extension identifier (e.g., "ms-python.python").
///
/// The id is stored in lowercase, so equality, hashing and ordering all
/// ignore case. Nothing else is normalized: the `publisher.name` shape is
/// not validated and surrounding whitespace is kept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ExtensionId(String);

impl ExtensionId {
    /// Create an id, normalizing it to lowercase.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().to_lowercase())
    }

    /// The canonical (lowercase) form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExtensionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for ExtensionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<ExtensionId> for String {
    fn from(id: ExtensionId) -> Self {
        id.0
    }
}

impl AsRef<str> for ExtensionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ExtensionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of extension ids.
pub type ExtensionSet = BTreeSet<ExtensionId>;

/// Difference between the desired and the installed extensions of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Desired but not installed
    pub to_install: ExtensionSet,
    /// Installed but not desired
    pub to_uninstall: ExtensionSet,
}

impl Diff {
    /// Check if applying this diff would change anything.
    pub fn has_changes(&self) -> bool {
        !self.to_install.is_empty() || !self.to_uninstall.is_empty()
    }

    /// Total number of changes.
    pub fn total(&self) -> usize {
        self.to_install.len() + self.to_uninstall.len()
    }
}

/// How the reconciler retries uninstalls.
///
/// Extensions that other installed extensions depend on refuse to uninstall
/// until their dependents are gone, so failed uninstalls are retried in
/// later passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallPolicy {
    /// Maximum number of uninstall passes (at least one pass always runs)
    pub max_passes: u32,
    /// Stop before `max_passes` when a pass removed nothing
    pub stop_on_stall: bool,
}

impl Default for UninstallPolicy {
    fn default() -> Self {
        Self {
            max_passes: 3,
            stop_on_stall: false,
        }
    }
}

impl UninstallPolicy {
    /// Create a policy with custom settings.
    pub fn new(max_passes: u32, stop_on_stall: bool) -> Self {
        Self {
            max_passes,
            stop_on_stall,
        }
    }
}

/// Outcome of syncing one profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Profile that was synced
    pub profile: String,
    /// Changes that were computed (and applied unless this was a dry run)
    pub diff: Diff,
    /// Extensions still installed after every uninstall pass
    pub failed_uninstalls: ExtensionSet,
    /// Whether changes were only computed, not applied
    pub dry_run: bool,
}

impl SyncReport {
    /// Check if the profile was already in sync.
    pub fn is_noop(&self) -> bool {
        !self.diff.has_changes()
    }

    /// Check if every change was applied.
    pub fn is_success(&self) -> bool {
        self.failed_uninstalls.is_empty()
    }
}
