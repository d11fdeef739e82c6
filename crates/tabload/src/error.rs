//! Error types for the tabload library.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for tabload operations.
///
/// Every variant is recoverable at the call site; the caller may retry with a
/// different path, column, or configuration.
#[derive(Debug, Error)]
pub enum TabloadError {
    /// The input path does not exist.
    #[error("file not found: '{path}'")]
    NotFound { path: PathBuf },

    /// The input path exists but cannot be read.
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// Any other error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid UTF-8 and lossy decoding is disabled.
    #[error("unable to decode '{path}' as UTF-8")]
    Decode { path: PathBuf },

    /// The header row is empty (or the file has no lines at all).
    #[error("empty header row: {0}")]
    EmptyHeader(String),

    /// A named column is absent from the table header.
    #[error("column not found: '{name}'")]
    ColumnNotFound { name: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TabloadError {
    /// Classify an IO error against the path it occurred on.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => TabloadError::NotFound { path },
            ErrorKind::PermissionDenied => TabloadError::PermissionDenied { path },
            _ => TabloadError::Io { path, source },
        }
    }
}

/// Result type alias for tabload operations.
pub type Result<T> = std::result::Result<T, TabloadError>;
