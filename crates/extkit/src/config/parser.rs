//! Parser for the YAML configuration document.
//!
//! A set may be written as a bare list of extension ids or as a mapping with
//! optional `includes` and `extensions`. Profiles are always mappings. Missing
//! or null fields default to empty.

use crate::config::{Config, ProfileDefinition, SetDefinition};
use crate::error::{Error, Result};
use crate::types::ExtensionId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const INLINE_ORIGIN: &str = "<string>";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    sets: Option<BTreeMap<String, Option<RawSet>>>,
    #[serde(default)]
    profiles: Option<BTreeMap<String, Option<RawProfile>>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSet {
    List(Vec<ExtensionId>),
    Full {
        #[serde(default)]
        includes: Option<Vec<String>>,
        #[serde(default)]
        extensions: Option<Vec<ExtensionId>>,
    },
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    sets: Option<Vec<String>>,
    #[serde(default)]
    extensions: Option<Vec<ExtensionId>>,
    #[serde(default)]
    disabled: bool,
}

impl From<RawSet> for SetDefinition {
    fn from(raw: RawSet) -> Self {
        match raw {
            RawSet::List(extensions) => Self {
                includes: Vec::new(),
                extensions: extensions.into_iter().collect(),
            },
            RawSet::Full {
                includes,
                extensions,
            } => Self {
                includes: includes.unwrap_or_default(),
                extensions: extensions.unwrap_or_default().into_iter().collect(),
            },
        }
    }
}

impl From<RawProfile> for ProfileDefinition {
    fn from(raw: RawProfile) -> Self {
        Self {
            sets: raw.sets.unwrap_or_default(),
            extensions: raw.extensions.unwrap_or_default().into_iter().collect(),
            disabled: raw.disabled,
        }
    }
}

/// Parse a configuration from a file path.
pub fn parse_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Parsing config {}", path.display());
    parse_with_origin(&content, path)
}

/// Parse a configuration from a string.
pub fn parse_string(content: &str) -> Result<Config> {
    parse_with_origin(content, Path::new(INLINE_ORIGIN))
}

fn parse_with_origin(content: &str, origin: &Path) -> Result<Config> {
    let parse_error = |e: serde_yaml::Error| Error::ConfigParse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    };

    if content.trim().is_empty() {
        return Err(Error::ConfigEmpty(origin.to_path_buf()));
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if is_empty_document(&value) {
        return Err(Error::ConfigEmpty(origin.to_path_buf()));
    }

    let raw: RawConfig = serde_yaml::from_value(value).map_err(parse_error)?;

    let sets = raw
        .sets
        .unwrap_or_default()
        .into_iter()
        .map(|(name, set)| (name, set.map(SetDefinition::from).unwrap_or_default()))
        .collect();

    let profiles = raw
        .profiles
        .unwrap_or_default()
        .into_iter()
        .map(|(name, profile)| {
            (
                name,
                profile.map(ProfileDefinition::from).unwrap_or_default(),
            )
        })
        .collect();

    Ok(Config { sets, profiles })
}

/// A document with nothing in it (null, `{}` or `[]`).
fn is_empty_document(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Null => true,
        serde_yaml::Value::Mapping(m) => m.is_empty(),
        serde_yaml::Value::Sequence(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_set_shorthand_and_structured() {
        let config = parse_string(
            r"
sets:
  base:
    - EditorConfig.EditorConfig
  python:
    includes: [base]
    extensions:
      - ms-python.python
  empty: {}
",
        )
        .unwrap();

        let base = config.set("base").unwrap();
        assert!(base.includes.is_empty());
        assert!(base.extensions.contains("editorconfig.editorconfig"));

        let python = config.set("python").unwrap();
        assert_eq!(python.includes, vec!["base"]);
        assert!(python.extensions.contains("ms-python.python"));

        assert_eq!(config.set("empty").unwrap(), &SetDefinition::default());
    }

    #[test]
    fn test_parse_profile_fields_optional() {
        let config = parse_string(
            r"
profiles:
  work:
    sets: [python, web]
  bare:
    extensions:
",
        )
        .unwrap();

        let work = config.profile("work").unwrap();
        assert_eq!(work.sets, vec!["python", "web"]);
        assert!(work.extensions.is_empty());
        assert!(!work.disabled);

        assert_eq!(config.profile("bare").unwrap(), &ProfileDefinition::default());
    }

    #[test]
    fn test_parse_missing_sections_default_empty() {
        let config = parse_string("profiles:\n  work: {}\n").unwrap();
        assert!(config.sets.is_empty());
        assert_eq!(config.profiles.len(), 1);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(matches!(parse_string(""), Err(Error::ConfigEmpty(_))));
        assert!(matches!(parse_string("   \n"), Err(Error::ConfigEmpty(_))));
        assert!(matches!(parse_string("~\n"), Err(Error::ConfigEmpty(_))));
        assert!(matches!(parse_string("{}\n"), Err(Error::ConfigEmpty(_))));
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let err = parse_string("sets: [unclosed\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_string("sets: 42\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        match parse_file(&path) {
            Err(Error::ConfigNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_file_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        match parse_file(file.path()) {
            Err(Error::ConfigEmpty(p)) => assert_eq!(p, file.path()),
            other => panic!("expected ConfigEmpty, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sets:\n  base: [a.one]\nprofiles:\n  work:\n    sets: [base]").unwrap();

        let config = parse_file(file.path()).unwrap();
        assert_eq!(config.profile("work").unwrap().sets, vec!["base"]);
    }
}
