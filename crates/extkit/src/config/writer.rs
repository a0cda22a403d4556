//! Writer for generating configuration snippets.
//!
//! Used by `export` to turn the extensions installed in a profile into a
//! `profiles:` block that can be pasted into the config file.

use crate::error::Result;
use crate::types::ExtensionId;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct ProfilesDocument<'a> {
    profiles: BTreeMap<&'a str, ProfileExtensions<'a>>,
}

#[derive(Serialize)]
struct ProfileExtensions<'a> {
    extensions: Vec<&'a ExtensionId>,
}

/// Write a `profiles:` block declaring `extensions` for one profile.
///
/// Extensions are written in the order given.
pub fn write_profile<'a>(
    profile: &'a str,
    extensions: impl IntoIterator<Item = &'a ExtensionId>,
) -> Result<String> {
    let document = ProfilesDocument {
        profiles: BTreeMap::from([(
            profile,
            ProfileExtensions {
                extensions: extensions.into_iter().collect(),
            },
        )]),
    };

    Ok(serde_yaml::to_string(&document)?)
}
