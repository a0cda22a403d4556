//! Backend abstraction for editor operations.
//!
//! The [`Backend`] trait defines the interface for listing, installing and
//! uninstalling the extensions of an editor profile, allowing for different
//! implementations (real `code` CLI, in-memory fake for testing).

pub mod code;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::Result;
use crate::types::{ExtensionId, ExtensionSet};

/// Backend trait for editor extension operations.
///
/// Every call is blocking. Implementations own no state the reconciler
/// depends on; each call reflects the editor as it is at that moment.
pub trait Backend: Send + Sync {
    /// Check if the editor is available.
    fn is_available(&self) -> bool;

    /// List the extensions installed in a profile.
    fn list_installed(&self, profile: &str) -> Result<ExtensionSet>;

    /// Install an extension into a profile.
    fn install(&self, profile: &str, id: &ExtensionId) -> Result<()>;

    /// Uninstall an extension from a profile.
    fn uninstall(&self, profile: &str, id: &ExtensionId) -> Result<()>;

    /// List the profiles the editor knows about.
    fn list_profiles(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

