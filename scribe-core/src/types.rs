//! Domain types for single-file reconciliation.
//!
//! Paths are `PathBuf`, content is `String`. Comparison against what is on
//! disk is always byte-exact.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Desired / observed state
// ---------------------------------------------------------------------------

/// The state a file should be brought into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesiredState {
    pub path: PathBuf,
    /// Full file content. Defaults to the empty string, which is a legitimate
    /// desired state distinct from "no file".
    #[serde(default)]
    pub content: String,
}

impl DesiredState {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// What currently lives at the desired path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedState {
    /// No file exists at the path.
    Absent,
    /// The file exists; its full byte content.
    Content(Vec<u8>),
}

impl ObservedState {
    /// `true` when the observed bytes are exactly `desired`.
    ///
    /// An absent file never matches, not even empty content.
    pub fn matches(&self, desired: &[u8]) -> bool {
        match self {
            ObservedState::Absent => false,
            ObservedState::Content(bytes) => bytes.as_slice() == desired,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ObservedState::Absent)
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Which step of a reconciliation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An existing file could not be read.
    Read,
    /// The file could not be created or overwritten.
    Write,
    /// The desired state was rejected before any I/O.
    InvalidInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Read => write!(f, "read error"),
            ErrorKind::Write => write!(f, "write error"),
            ErrorKind::InvalidInput => write!(f, "invalid input"),
        }
    }
}

/// Serializable description of a failed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    /// Human-readable message, including the underlying OS error text.
    pub message: String,
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Outcome of one reconciliation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub changed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ReconciliationResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            error: None,
        }
    }

    /// A terminal failure. `changed` is always `false`: failed calls never
    /// partially apply.
    pub fn failed(error: ErrorInfo) -> Self {
        Self {
            changed: false,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_never_matches_even_empty_content() {
        assert!(!ObservedState::Absent.matches(b""));
        assert!(!ObservedState::Absent.matches(b"hello"));
    }

    #[test]
    fn content_matches_byte_exactly() {
        let observed = ObservedState::Content(b"hello".to_vec());
        assert!(observed.matches(b"hello"));
        assert!(!observed.matches(b"hello\n"));
        assert!(!observed.matches(b"Hello"));
        assert!(ObservedState::Content(Vec::new()).matches(b""));
    }

    #[test]
    fn desired_state_defaults_content_to_empty() {
        let desired: DesiredState = serde_yaml::from_str("path: notes.txt\n").unwrap();
        assert_eq!(desired, DesiredState::new("notes.txt", ""));
    }

    #[test]
    fn result_without_error_omits_error_field() {
        let yaml = serde_yaml::to_string(&ReconciliationResult::changed()).unwrap();
        assert!(yaml.contains("changed: true"));
        assert!(!yaml.contains("error"));
    }

    #[test]
    fn failed_result_is_never_changed() {
        let result = ReconciliationResult::failed(ErrorInfo {
            kind: ErrorKind::Write,
            message: "disk full".to_string(),
        });
        assert!(!result.changed);
        assert!(result.is_failed());
        assert_eq!(
            result.error.unwrap().to_string(),
            "write error: disk full"
        );
    }
}
