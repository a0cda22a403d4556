//! Path and executable resolution for vscode-profiles
//!
//! # Environment Variables
//!
//! - `VSCODE_PROFILES_CONFIG` - Override the config file path
//! - `VSCODE_PROFILES_CODE` - Override the VS Code executable
//!
//! # Resolution Priority
//!
//! For config_file():
//! 1. `--config` option
//! 2. `VSCODE_PROFILES_CONFIG` environment variable
//! 3. `~/.vscode-profiles.yaml`
//!
//! For code_binary():
//! 1. `--code-bin` option
//! 2. `VSCODE_PROFILES_CODE` environment variable
//! 3. `code`

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable for config file override
pub const ENV_CONFIG: &str = "VSCODE_PROFILES_CONFIG";

/// Environment variable for editor executable override
pub const ENV_CODE: &str = "VSCODE_PROFILES_CODE";

/// Default config file name, in the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".vscode-profiles.yaml";

/// Get the config file path
pub fn config_file(cli_override: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        let path = expand(path);
        log::debug!("Using config from --config: {}", path.display());
        return Ok(path);
    }

    if let Ok(path) = std::env::var(ENV_CONFIG) {
        let path = expand(&path);
        log::debug!("Using config from {}: {}", ENV_CONFIG, path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(DEFAULT_CONFIG_FILE);
    log::debug!("Using default config: {}", path.display());
    Ok(path)
}

/// Get the VS Code executable to run
pub fn code_binary(cli_override: Option<&str>) -> String {
    if let Some(bin) = cli_override {
        return expand(bin).to_string_lossy().into_owned();
    }

    if let Ok(bin) = std::env::var(ENV_CODE) {
        log::debug!("Using editor from {}: {}", ENV_CODE, bin);
        return expand(&bin).to_string_lossy().into_owned();
    }

    extkit::backend::code::DEFAULT_BINARY.to_string()
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    /// Serializes tests that touch the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper to run a test with temporary env var
    fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let original = env::var(key).ok();
        // SAFETY: ENV_LOCK keeps other env-touching tests out
        unsafe { env::set_var(key, value) };
        let result = f();
        match original {
            // SAFETY: Tests run in isolation
            Some(v) => unsafe { env::set_var(key, v) },
            None => unsafe { env::remove_var(key) },
        }
        result
    }

    /// Helper to run a test with env var removed
    fn without_env_var<F, R>(key: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let original = env::var(key).ok();
        // SAFETY: ENV_LOCK keeps other env-touching tests out
        unsafe { env::remove_var(key) };
        let result = f();
        if let Some(v) = original {
            // SAFETY: Tests run in isolation
            unsafe { env::set_var(key, v) };
        }
        result
    }

    #[test]
    fn test_config_file_cli_override_wins() {
        with_env_var(ENV_CONFIG, "/from/env.yaml", || {
            let result = config_file(Some("/from/cli.yaml")).unwrap();
            assert_eq!(result, PathBuf::from("/from/cli.yaml"));
        });
    }

    #[test]
    fn test_config_file_env_override() {
        with_env_var(ENV_CONFIG, "/custom/profiles.yaml", || {
            let result = config_file(None).unwrap();
            assert_eq!(result, PathBuf::from("/custom/profiles.yaml"));
        });
    }

    #[test]
    fn test_config_file_default() {
        without_env_var(ENV_CONFIG, || {
            let result = config_file(None).unwrap();
            let home = dirs::home_dir().unwrap();
            assert_eq!(result, home.join(".vscode-profiles.yaml"));
        });
    }

    #[test]
    fn test_config_file_tilde() {
        let home = dirs::home_dir().unwrap();
        let result = config_file(Some("~/dotfiles/vscode.yaml")).unwrap();
        assert_eq!(result, home.join("dotfiles").join("vscode.yaml"));
    }

    #[test]
    fn test_code_binary() {
        assert_eq!(code_binary(Some("code-insiders")), "code-insiders");

        with_env_var(ENV_CODE, "codium", || {
            assert_eq!(code_binary(None), "codium");
        });

        without_env_var(ENV_CODE, || {
            assert_eq!(code_binary(None), "code");
        });
    }

    #[test]
    fn test_expand_absolute() {
        assert_eq!(expand("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_unknown_env_var_unchanged() {
        let result = expand("/path/$NONEXISTENT_VAR_12345/file");
        assert_eq!(result, PathBuf::from("/path/$NONEXISTENT_VAR_12345/file"));
    }
}
