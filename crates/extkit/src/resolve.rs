//! Resolution of sets and profiles into concrete extension lists.
//!
//! Set inclusion must form a DAG. Cycle detection tracks the inclusion path
//! of the current branch only, so two sets that both include a shared third
//! set (diamond inclusion) resolve without error.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::ExtensionSet;

/// Resolve every extension a set provides.
///
/// Returns the set's own extensions plus, recursively, the extensions of
/// every set it includes.
pub fn resolve_set_extensions(config: &Config, set_name: &str) -> Result<ExtensionSet> {
    let mut path = Vec::new();
    resolve_set_on_path(config, set_name, &mut path)
}

/// Resolve every extension a profile should have.
///
/// Errors from set resolution are returned unchanged.
pub fn resolve_profile_extensions(config: &Config, profile_name: &str) -> Result<ExtensionSet> {
    let profile = config
        .profile(profile_name)
        .ok_or_else(|| Error::ProfileNotFound {
            name: profile_name.to_string(),
        })?;

    let mut extensions = ExtensionSet::new();
    for set_name in &profile.sets {
        extensions.extend(resolve_set_extensions(config, set_name)?);
    }
    extensions.extend(profile.extensions.iter().cloned());

    log::debug!(
        "Profile {} resolves to {} extensions",
        profile_name,
        extensions.len()
    );
    Ok(extensions)
}

/// `path` holds the sets currently being expanded above `set_name`.
fn resolve_set_on_path<'a>(
    config: &'a Config,
    set_name: &'a str,
    path: &mut Vec<&'a str>,
) -> Result<ExtensionSet> {
    if path.contains(&set_name) {
        log::debug!("Inclusion cycle: {} -> {}", path.join(" -> "), set_name);
        return Err(Error::CircularReference {
            name: set_name.to_string(),
        });
    }

    let set = config.set(set_name).ok_or_else(|| Error::SetNotFound {
        name: set_name.to_string(),
    })?;

    path.push(set_name);
    let mut extensions = ExtensionSet::new();
    for included in &set.includes {
        extensions.extend(resolve_set_on_path(config, included, path)?);
    }
    path.pop();

    extensions.extend(set.extensions.iter().cloned());
    Ok(extensions)
}
