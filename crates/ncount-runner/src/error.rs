//! Error types for the runner.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Errors that stop the runner before a status can be written.
///
/// Decode failures are not errors here: they travel in the status file.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// IO error
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file has the wrong shape
    #[error("Malformed {} in {}: {}", .what, .path.display(), .message)]
    Format {
        what: &'static str,
        path: PathBuf,
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Header rejected where no status channel exists
    #[error("Decode error: {0}")]
    Decode(#[from] ncount_core::Error),
}

impl RunnerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunnerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(
        what: &'static str,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        RunnerError::Format {
            what,
            path: path.into(),
            message: message.into(),
        }
    }
}
