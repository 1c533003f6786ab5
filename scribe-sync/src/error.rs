//! Error types for scribe-sync.

use std::path::PathBuf;

use thiserror::Error;

use scribe_core::{ErrorInfo, ErrorKind, ReconciliationResult};

/// All errors that can arise from reconciling a file.
///
/// None of these are recovered internally: no retry, no rollback.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The desired path was empty; no I/O was attempted.
    #[error("path must not be empty")]
    EmptyPath,

    /// An existing file could not be read. A missing file is not an error.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be created or overwritten.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReconcileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReconcileError::EmptyPath => ErrorKind::InvalidInput,
            ReconcileError::Read { .. } => ErrorKind::Read,
            ReconcileError::Write { .. } => ErrorKind::Write,
        }
    }

    /// Serializable form, carrying the real OS error text.
    pub fn info(&self) -> ErrorInfo {
        ErrorInfo {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<&ReconcileError> for ReconciliationResult {
    fn from(err: &ReconcileError) -> Self {
        ReconciliationResult::failed(err.info())
    }
}

pub(crate) fn read_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReconcileError {
    ReconcileError::Read {
        path: path.into(),
        source,
    }
}

pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReconcileError {
    ReconcileError::Write {
        path: path.into(),
        source,
    }
}
