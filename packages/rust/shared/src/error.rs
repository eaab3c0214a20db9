//! Error types for the poetry corpus collector.
//!
//! Library crates use [`CorpusError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all collection operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The input path is missing or is not a directory.
    #[error("invalid input path {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    /// A matched file is not UTF-8, not JSON, or holds a record without
    /// a `paragraphs` string array.
    #[error("malformed record in {path:?}: {message}")]
    MalformedRecord { path: PathBuf, message: String },

    /// Fewer paragraphs were collected than the sample requires.
    #[error("insufficient data for corpus {corpus}: collected {available} paragraphs, need at least {required}")]
    InsufficientData {
        corpus: String,
        available: usize,
        required: usize,
    },

    /// The glob pattern could not be built or compiled.
    #[error("invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl CorpusError {
    /// Create an invalid-input error for `path`.
    pub fn invalid_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-record error for the file at `path`.
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pattern error from any displayable message.
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
