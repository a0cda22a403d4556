//! Real VS Code CLI backend using `code` commands.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::storage;
use crate::types::{ExtensionId, ExtensionSet};
use std::process::Command;

/// Default name of the VS Code executable.
pub const DEFAULT_BINARY: &str = "code";

/// Backend that executes real `code` commands.
pub struct CodeBackend {
    /// Path or name of the code executable
    binary: String,
}

impl Default for CodeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBackend {
    /// Create a backend that runs `code` from PATH.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Create a backend that runs a specific executable (e.g. `code-insiders`).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The executable this backend runs.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run a code command and return stdout, failing on non-zero exit.
    fn run_code(&self, args: &[&str]) -> Result<String> {
        log::debug!("Running {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::EditorNotFound {
                    binary: self.binary.clone(),
                }
            } else {
                Error::CommandFailed {
                    message: format!("failed to execute {}: {}", self.binary, e),
                    stderr: String::new(),
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("{} exited with {}: {}", self.binary, output.status, stderr.trim());
            return Err(Error::from_code_output(&self.binary, args, &stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Backend for CodeBackend {
    fn is_available(&self) -> bool {
        self.run_code(&["--version"]).is_ok()
    }

    fn list_installed(&self, profile: &str) -> Result<ExtensionSet> {
        let output = self.run_code(&["--profile", profile, "--list-extensions"])?;
        Ok(parse_extension_list(&output))
    }

    fn install(&self, profile: &str, id: &ExtensionId) -> Result<()> {
        self.run_code(&["--profile", profile, "--install-extension", id.as_str()])?;
        Ok(())
    }

    fn uninstall(&self, profile: &str, id: &ExtensionId) -> Result<()> {
        self.run_code(&["--profile", profile, "--uninstall-extension", id.as_str()])?;
        Ok(())
    }

    fn list_profiles(&self) -> Result<Vec<String>> {
        Ok(storage::list_profiles())
    }
}

/// Parse `code --list-extensions` output, one id per line.
fn parse_extension_list(output: &str) -> ExtensionSet {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ExtensionId::new)
        .collect()
}
