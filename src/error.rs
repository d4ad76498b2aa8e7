//! Error types for zenilib-clean
//!
//! Defines CleanError and its exit-code mapping. Deletion failures are
//! deliberately NOT errors: they surface as outcomes in the run summary
//! (see `remover::RemoveOutcome`) and never abort a run.

use std::fmt;
use std::path::PathBuf;

/// zenilib-clean error type
#[derive(Debug)]
pub enum CleanError {
    // Environment errors (Exit 1)
    /// Root directory does not exist
    RootNotFound(PathBuf),
    /// Root path exists but is not a directory
    NotADirectory(PathBuf),
    /// I/O error outside the delete path
    IoError(std::io::Error),

    // Usage / catalog errors (Exit 2)
    /// Requested profile is not in the catalog
    UnknownProfile { name: String, available: Vec<String> },
    /// Profile includes form a cycle
    ProfileCycle { name: String },
    /// A catalog pattern is not a valid glob
    BadPattern {
        pattern: String,
        source: glob::PatternError,
    },
    /// The embedded profile catalog failed to parse
    Catalog(toml::de::Error),
}

impl CleanError {
    /// Exit code for the process
    pub fn exit_code(&self) -> u8 {
        match self {
            // Usage and catalog defects
            Self::UnknownProfile { .. }
            | Self::ProfileCycle { .. }
            | Self::BadPattern { .. }
            | Self::Catalog(_) => 2,
            // Environment errors
            Self::RootNotFound(_) | Self::NotADirectory(_) | Self::IoError(_) => 1,
        }
    }

    /// Human-readable error message
    pub fn user_message(&self) -> String {
        match self {
            Self::RootNotFound(path) => {
                format!("root directory '{}' does not exist", path.display())
            }
            Self::NotADirectory(path) => {
                format!("root path '{}' is not a directory", path.display())
            }
            Self::UnknownProfile { name, available } => {
                format!(
                    "unknown profile '{}' (available: {})",
                    name,
                    available.join(", ")
                )
            }
            Self::ProfileCycle { name } => {
                format!("profile '{}' is included by itself (include cycle)", name)
            }
            Self::BadPattern { pattern, source } => {
                format!("invalid glob pattern '{}': {}", pattern, source)
            }
            Self::Catalog(e) => format!("profile catalog is invalid: {}", e),
            Self::IoError(e) => format!("I/O error: {}", e),
        }
    }
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::BadPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<toml::de::Error> for CleanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Catalog(err)
    }
}
