//! Error types for configuration loading.

use std::io::ErrorKind;
use std::path::PathBuf;

/// Errors that can occur while locating, reading, or decoding a config file.
///
/// Every variant that touches the filesystem carries the computed path so
/// callers can report which file was involved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The process argument list was empty, so there is no program name to
    /// derive a config filename from.
    #[error("Process has no invocation name (argv[0] is missing)")]
    MissingInvocationName,

    /// The config file could not be opened or read.
    ///
    /// Common causes: file missing, permission denied, prefix points nowhere.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or its shape does not fit the destination.
    #[error("Failed to decode config file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-place destination could not be turned into a JSON value.
    #[error("Failed to encode destination for merging: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ConfigError {
    /// Returns true when the config file simply does not exist.
    ///
    /// Lets callers fall back to defaults for a missing file while still
    /// surfacing permission and decode problems.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == ErrorKind::NotFound)
    }

    /// The config path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Decode { path, .. } => Some(path),
            ConfigError::MissingInvocationName | ConfigError::Encode(_) => None,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
