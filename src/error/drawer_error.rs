//! The unified drawer error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the drawer subsystem and its collaborators.
///
/// None of these are fatal to the application. Losing a scroll offset is
/// cosmetic, so callers log persistence failures and move on.
#[derive(Debug, Error)]
pub enum DrawerError {
    /// Filesystem failure while touching persisted view state.
    #[error("I/O error during {operation} at {path:?}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted view-state record could not be encoded or decoded.
    #[error("view state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No home directory to put the state directory under.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Terminal setup or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl DrawerError {
    /// Build an [`DrawerError::Io`] for `operation` on `path`.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DrawerError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Whether the UI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DrawerError::Terminal(_))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DrawerError::Io { .. } => "E_DRAWER_IO",
            DrawerError::Serialization(_) => "E_DRAWER_SERDE",
            DrawerError::NoHomeDirectory => "E_DRAWER_NO_HOME",
            DrawerError::Terminal(_) => "E_DRAWER_TERM",
        }
    }
}

impl From<std::io::Error> for DrawerError {
    fn from(err: std::io::Error) -> Self {
        DrawerError::Terminal(err.to_string())
    }
}
