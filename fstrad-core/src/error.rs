//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Translating Browser
//!
//! Every fallible operation outside the resolution pipeline returns
//! `Result<T, AppError>`. Remote lookup failures have their own type
//! ([`TranslateError`]) because they never leave the resolver.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for listing, renaming, and configuration work.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Directory could not be listed.
    #[error("Navigation failed: cannot access {path:?}: {reason}")]
    NavigationFailed { path: PathBuf, reason: String },

    /// File operation specific errors
    #[error("File operation '{operation}' failed on {path:?}: {reason}")]
    FileOperationFailed {
        operation: String,
        path: PathBuf,
        reason: String,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a navigation failure error
    pub fn navigation_failed<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::NavigationFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a file operation failure error
    pub fn file_operation_failed<S1, P, S2>(operation: S1, path: P, reason: S2) -> Self
    where
        S1: Into<String>,
        P: Into<PathBuf>,
        S2: Into<String>,
    {
        Self::FileOperationFailed {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Manual Clone implementation to handle non-Clone fields
impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            Self::Io(e) => Self::Io(io::Error::new(e.kind(), e.to_string())),
            Self::NavigationFailed { path, reason } => Self::NavigationFailed {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::FileOperationFailed {
                operation,
                path,
                reason,
            } => Self::FileOperationFailed {
                operation: operation.clone(),
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::Config(e) => Self::Other(format!("Config error: {e}")),
            Self::ConfigIo { path, source } => Self::ConfigIo {
                path: path.clone(),
                source: io::Error::new(source.kind(), source.to_string()),
            },
            Self::Other(msg) => Self::Other(msg.clone()),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}

/// Failures of the remote lookup collaborator.
///
/// These are recovered inside [`crate::translate::resolver::NameResolver`]
/// and never reach the UI.
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("translation service answered with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("translation service returned an empty result")]
    Empty,

    #[error("translation timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("translation task panicked: {0}")]
    Panicked(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_preserves_io_kind() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected clone: {other:?}"),
        }
    }

    #[test]
    fn navigation_error_mentions_path() {
        let err = AppError::navigation_failed("/nowhere", "missing");
        let text = err.to_string();
        assert!(text.contains("/nowhere"));
        assert!(text.contains("missing"));
    }
}
