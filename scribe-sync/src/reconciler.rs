//! Single-file reconciliation.
//!
//! ## `reconcile` — 4-step protocol
//!
//! 1. Reject an empty path before any I/O.
//! 2. Read the current file into a [`ReadOutcome`]; a missing file is
//!    [`ObservedState::Absent`], anything else that fails is a read error.
//! 3. Compare byte-exactly with the desired content → return unchanged if
//!    identical. An absent file never matches, even empty content.
//! 4. Dry-run → report the change without writing. Otherwise truncate and
//!    write the full content.
//!
//! There is no locking. Two concurrent calls against one path race, and the
//! last write wins; callers needing exclusivity serialize calls themselves.

use std::io;
use std::path::Path;

use scribe_core::{DesiredState, ObservedState, ReconciliationResult};

use crate::error::{read_err, write_err, ReconcileError};
use crate::fs::{FileSystem, OsFileSystem};

// ---------------------------------------------------------------------------
// Read outcome
// ---------------------------------------------------------------------------

/// Every way the read step can end.
#[derive(Debug)]
pub enum ReadOutcome {
    Absent,
    Content(Vec<u8>),
    Failed(io::Error),
}

impl From<io::Result<Vec<u8>>> for ReadOutcome {
    fn from(res: io::Result<Vec<u8>>) -> Self {
        match res {
            Ok(bytes) => ReadOutcome::Content(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => ReadOutcome::Absent,
            Err(err) => ReadOutcome::Failed(err),
        }
    }
}

impl ReadOutcome {
    /// Turn the outcome into an observed state, or a read error for `path`.
    pub fn into_observed(self, path: &Path) -> Result<ObservedState, ReconcileError> {
        match self {
            ReadOutcome::Absent => Ok(ObservedState::Absent),
            ReadOutcome::Content(bytes) => Ok(ObservedState::Content(bytes)),
            ReadOutcome::Failed(err) => Err(read_err(path, err)),
        }
    }
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

/// Brings one file at a time into its desired state.
#[derive(Debug, Clone, Default)]
pub struct Reconciler<F = OsFileSystem> {
    fs: F,
}

impl Reconciler<OsFileSystem> {
    pub fn new() -> Self {
        Self { fs: OsFileSystem }
    }
}

impl<F: FileSystem> Reconciler<F> {
    /// Reconciler backed by a custom filesystem.
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Read whatever is currently at `path`.
    pub fn observe(&self, path: &Path) -> ReadOutcome {
        ReadOutcome::from(self.fs.read(path))
    }

    /// Reconcile the file at `desired.path` to `desired.content`.
    ///
    /// Returns `changed = true` when the file was (or, under `dry_run`,
    /// would be) written.
    pub fn reconcile(
        &self,
        desired: &DesiredState,
        dry_run: bool,
    ) -> Result<ReconciliationResult, ReconcileError> {
        let path = desired.path();
        if path.as_os_str().is_empty() {
            return Err(ReconcileError::EmptyPath);
        }

        let observed = self.observe(path).into_observed(path)?;
        let content = desired.content_bytes();

        if observed.matches(content) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(ReconciliationResult::unchanged());
        }

        if dry_run {
            tracing::info!("[dry-run] would write: {}", path.display());
            return Ok(ReconciliationResult::changed());
        }

        self.fs
            .write(path, content)
            .map_err(|e| write_err(path, e))?;

        if observed.is_absent() {
            tracing::info!("created: {}", path.display());
        } else {
            tracing::info!("wrote: {}", path.display());
        }
        Ok(ReconciliationResult::changed())
    }
}

/// Reconcile `path` to `content` on the real filesystem.
pub fn reconcile(
    path: impl AsRef<Path>,
    content: &str,
    dry_run: bool,
) -> Result<ReconciliationResult, ReconcileError> {
    Reconciler::new().reconcile(&DesiredState::new(path.as_ref(), content), dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
