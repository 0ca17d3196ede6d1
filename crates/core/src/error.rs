//! Error types for walking a states directory.
//!
//! Every error here is fatal: the walker performs no retries and keeps no
//! checkpoint, so the whole run is expected to be repeated from scratch.

use crate::convert::ConversionError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a walk or a single-file operation.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A required table or structure file does not exist.
    #[error("Required file not found: {path}")]
    MissingFile { path: PathBuf },

    /// A table row has fewer columns than the table format requires.
    #[error("Malformed table {path} at line {line}: expected at least {expected} columns, found {found}")]
    MalformedTable {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The external converter rejected its input.
    #[error("Conversion of {subject} failed: {source}")]
    Conversion {
        subject: String,
        source: ConversionError,
    },

    /// The report document could not be written or finalized.
    #[error("Failed to write report {path}: {reason}")]
    DocumentWrite { path: PathBuf, reason: String },

    /// Any other I/O failure while reading inputs.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl WalkError {
    /// Map an I/O error on `path` to `MissingFile` when the file is absent.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::DocumentWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Type alias for Result with WalkError.
pub type WalkResult<T> = Result<T, WalkError>;
