//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config `{}`: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Source [`std::io::Error`].
        source: std::io::Error,
    },
    /// The document is not valid configuration JSON.
    #[error("malformed config: {source}")]
    Parse {
        /// Source [`serde_json::Error`].
        #[from]
        source: serde_json::Error,
    },
    /// The document parsed but its values are inconsistent.
    #[error("invalid config: {reason}")]
    Invalid {
        /// Human-readable reason describing the problem.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
