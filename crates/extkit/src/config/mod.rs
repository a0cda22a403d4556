//! Declarative extension configuration.
//!
//! A configuration document defines reusable **sets** of extensions (which may
//! include other sets) and **profiles** that pull from sets:
//!
//! ```yaml
//! sets:
//!   base:
//!     - editorconfig.editorconfig
//!   python:
//!     includes: [base]
//!     extensions:
//!       - ms-python.python
//! profiles:
//!   work:
//!     sets: [python]
//!     extensions:
//!       - github.copilot
//! ```

pub mod parser;
pub mod writer;

pub use parser::{parse_file, parse_string};
pub use writer::write_profile;

use crate::error::Result;
use crate::resolve;
use crate::types::ExtensionSet;
use std::collections::BTreeMap;
use std::path::Path;

/// A named, reusable bundle of extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDefinition {
    /// Other sets whose extensions are pulled in, in declaration order
    pub includes: Vec<String>,
    /// Extensions listed directly on this set
    pub extensions: ExtensionSet,
}

/// A VS Code profile and the extensions it should have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDefinition {
    /// Sets this profile pulls from, in declaration order
    pub sets: Vec<String>,
    /// Extensions listed directly on this profile
    pub extensions: ExtensionSet,
    /// Skipped by `sync --all`
    pub disabled: bool,
}

/// A parsed configuration document.
///
/// Loaded once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Set definitions by name
    pub sets: BTreeMap<String, SetDefinition>,
    /// Profile definitions by name
    pub profiles: BTreeMap<String, ProfileDefinition>,
}

impl Config {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        parse_file(path)
    }

    /// Look up a set by name.
    pub fn set(&self, name: &str) -> Option<&SetDefinition> {
        self.sets.get(name)
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileDefinition> {
        self.profiles.get(name)
    }

    /// Names of profiles that are not disabled, in name order.
    pub fn enabled_profiles(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .filter(|(_, p)| !p.disabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Resolve every extension a set provides, including its included sets.
    pub fn resolve_set(&self, name: &str) -> Result<ExtensionSet> {
        resolve::resolve_set_extensions(self, name)
    }

    /// Resolve every extension a profile should have.
    pub fn resolve_profile(&self, name: &str) -> Result<ExtensionSet> {
        resolve::resolve_profile_extensions(self, name)
    }

    /// Resolve every set and profile, returning the first error found.
    pub fn validate(&self) -> Result<()> {
        for name in self.sets.keys() {
            self.resolve_set(name)?;
        }
        for name in self.profiles.keys() {
            self.resolve_profile(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_enabled_profiles_skips_disabled() {
        let config = parse_string(
            r"
profiles:
  work:
    extensions: [a.a]
  old:
    disabled: true
  home: {}
",
        )
        .unwrap();

        assert_eq!(config.enabled_profiles(), vec!["home", "work"]);
        assert!(config.profile("old").unwrap().disabled);
    }

    #[test]
    fn test_validate_reports_dangling_include() {
        let config = parse_string(
            r"
sets:
  web:
    includes: [missing]
",
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::SetNotFound { ref name } if name == "missing"));
    }

    #[test]
    fn test_validate_accepts_consistent_config() {
        let config = parse_string(
            r"
sets:
  base: [a.a]
  web:
    includes: [base]
profiles:
  work:
    sets: [web]
",
        )
        .unwrap();

        assert!(config.validate().is_ok());
    }
}
