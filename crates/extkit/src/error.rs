//! Error types for configuration and editor operations.
//!
//! Errors are split into two categories: problems with the configuration
//! document (which abort before any editor call is made) and failures of the
//! external editor binary. The reconciler relies on this split to decide
//! which failures it may absorb.

use std::path::PathBuf;
use thiserror::Error;

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The configuration is missing, malformed or inconsistent
    Config,
    /// The editor binary is missing or a command it ran failed
    Collaborator,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Config => "Configuration error",
            Self::Collaborator => "Editor command error",
        }
    }

    /// Get actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Config => "Fix the config file and run 'vscode-profiles check'",
            Self::Collaborator => {
                "Make sure VS Code is installed and the 'code' command is on your PATH"
            }
        }
    }
}

/// Errors that can occur while loading configuration or talking to the editor.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but holds no document
    #[error("Config file is empty: {}", .0.display())]
    ConfigEmpty(PathBuf),

    /// Config document could not be parsed
    #[error("invalid config {}: {message}", .path.display())]
    ConfigParse {
        /// Path of the document (or `<string>` when parsed from memory)
        path: PathBuf,
        /// Parser error message
        message: String,
    },

    /// A referenced set is not defined
    #[error("Set not found: {name}")]
    SetNotFound {
        /// Name of the missing set
        name: String,
    },

    /// A requested profile is not defined
    #[error("Profile not found in config: {name}")]
    ProfileNotFound {
        /// Name of the missing profile
        name: String,
    },

    /// A set includes itself, directly or through other sets
    #[error("Circular set reference detected: {name}")]
    CircularReference {
        /// Name of the set that was reached twice on one inclusion path
        name: String,
    },

    /// The editor binary could not be executed
    #[error("'{binary}' command not found. Is VS Code installed?")]
    EditorNotFound {
        /// Binary that was looked up
        binary: String,
    },

    /// Editor command exited with a failure status
    #[error("VS Code command failed: {message}")]
    CommandFailed {
        /// Description of what command failed
        message: String,
        /// Standard error output from the failed command
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ConfigNotFound(_)
            | Error::ConfigEmpty(_)
            | Error::ConfigParse { .. }
            | Error::SetNotFound { .. }
            | Error::ProfileNotFound { .. }
            | Error::CircularReference { .. }
            | Error::Yaml(_) => ErrorCategory::Config,
            Error::EditorNotFound { .. }
            | Error::CommandFailed { .. }
            | Error::Io(_)
            | Error::Json(_) => ErrorCategory::Collaborator,
        }
    }

    /// Whether this error comes from the configuration.
    pub fn is_config_error(&self) -> bool {
        self.category() == ErrorCategory::Config
    }

    /// Whether this error comes from the editor binary.
    pub fn is_collaborator_error(&self) -> bool {
        self.category() == ErrorCategory::Collaborator
    }

    /// Whether this is a "not found" error for a set or profile.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SetNotFound { .. } | Error::ProfileNotFound { .. })
    }

    /// Create an error from a failed editor invocation.
    pub fn from_code_output(binary: &str, args: &[&str], stderr: &str) -> Self {
        Error::CommandFailed {
            message: format!("{} {}", binary, args.join(" ")),
            stderr: stderr.trim().to_string(),
        }
    }
}

/// Result type for extkit operations.
pub type Result<T> = std::result::Result<T, Error>;
