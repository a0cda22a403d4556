//! VS Code profile discovery from the editor's global storage file.
//!
//! VS Code records its user data profiles in
//! `<User>/globalStorage/storage.json` under `userDataProfiles`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct StorageFile {
    #[serde(default, rename = "userDataProfiles")]
    user_data_profiles: Vec<StoredProfile>,
}

#[derive(Debug, Deserialize)]
struct StoredProfile {
    #[serde(default)]
    name: Option<String>,
}

/// Platform-specific VS Code `User` directory.
///
/// - macOS: `~/Library/Application Support/Code/User`
/// - Windows: `~/AppData/Roaming/Code/User`
/// - Linux: `~/.config/Code/User`
pub fn user_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let dir = if cfg!(target_os = "macos") {
        home.join("Library/Application Support/Code/User")
    } else if cfg!(windows) {
        home.join("AppData/Roaming/Code/User")
    } else {
        home.join(".config/Code/User")
    };
    Some(dir)
}

/// Path of the global storage file.
pub fn storage_file() -> Option<PathBuf> {
    user_dir().map(|dir| dir.join("globalStorage").join("storage.json"))
}

/// Names of the profiles VS Code knows about.
///
/// Returns an empty list when the storage file is missing or unreadable.
pub fn list_profiles() -> Vec<String> {
    match storage_file() {
        Some(path) => list_profiles_in(&path),
        None => Vec::new(),
    }
}

/// Names of the profiles recorded in a specific storage file.
pub fn list_profiles_in(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("Cannot read {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    parse_profiles(&content)
}

/// Parse profile names from storage.json content.
fn parse_profiles(content: &str) -> Vec<String> {
    match serde_json::from_str::<StorageFile>(content) {
        Ok(storage) => storage
            .user_data_profiles
            .into_iter()
            .filter_map(|p| p.name)
            .filter(|name| !name.is_empty())
            .collect(),
        Err(e) => {
            log::debug!("Malformed storage.json: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profiles() {
        let content = r#"{
            "theme": "vs-dark",
            "userDataProfiles": [
                {"location": "abc", "name": "Work"},
                {"location": "def"},
                {"location": "ghi", "name": ""},
                {"location": "jkl", "name": "Python"}
            ]
        }"#;

        assert_eq!(parse_profiles(content), vec!["Work", "Python"]);
    }

    #[test]
    fn test_parse_profiles_without_key() {
        assert!(parse_profiles(r#"{"theme": "light"}"#).is_empty());
    }

    #[test]
    fn test_parse_profiles_malformed() {
        assert!(parse_profiles("{not json").is_empty());
        assert!(parse_profiles(r#"{"userDataProfiles": 3}"#).is_empty());
    }

    #[test]
    fn test_list_profiles_in_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_profiles_in(&dir.path().join("storage.json")).is_empty());
    }

    #[test]
    fn test_list_profiles_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"userDataProfiles": [{"name": "Rust"}]}"#).unwrap();

        assert_eq!(list_profiles_in(&path), vec!["Rust"]);
    }

    #[test]
    fn test_storage_file_location() {
        if let Some(path) = storage_file() {
            assert!(path.ends_with("globalStorage/storage.json"));
        }
    }
}
