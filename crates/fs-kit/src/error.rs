//! Error types for fs-kit

use std::path::PathBuf;

/// Result type for fs-kit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fs-kit operations
///
/// Every variant carries the name of the failing operation and the path it
/// was applied to. `NotFound` is split out from the general I/O variant so
/// callers can treat a missing node as an expected condition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{op}: no such file or directory: {}", path.display())]
    NotFound { op: &'static str, path: PathBuf },

    #[error("{op}: {} is a directory", path.display())]
    IsADirectory { op: &'static str, path: PathBuf },

    #[error("{op}: {} is not a directory", path.display())]
    NotADirectory { op: &'static str, path: PathBuf },

    #[error("{op} failed at {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{op} failed to process JSON for {}: {source}", path.display())]
    Json {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wrap an OS error, classifying `NotFound` into its own variant.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { op, path }
        } else {
            Self::Io { op, path, source }
        }
    }

    pub fn json(op: &'static str, path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            op,
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause was a missing node.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
