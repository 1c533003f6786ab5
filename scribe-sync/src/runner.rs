//! Per-file reports and sequential application of many desired states.

use std::path::PathBuf;

use serde::Serialize;

use scribe_core::{DesiredState, ReconciliationResult};

use crate::checksum::sha256_hex;
use crate::fs::FileSystem;
use crate::reconciler::Reconciler;

// ---------------------------------------------------------------------------
// File report
// ---------------------------------------------------------------------------

/// How a single file ended up, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File was written (content changed or did not previously exist).
    Written,
    /// Dry-run: the file *would* have been written.
    WouldWrite,
    /// Content already matched; nothing was written.
    Unchanged,
    /// Reconciliation failed; see the report's error.
    Failed,
}

/// Structured outcome for one file, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub dry_run: bool,
    /// SHA-256 of the desired content.
    pub checksum: String,
    #[serde(flatten)]
    pub result: ReconciliationResult,
}

impl FileReport {
    pub fn status(&self) -> FileStatus {
        match (&self.result.error, self.result.changed, self.dry_run) {
            (Some(_), _, _) => FileStatus::Failed,
            (None, false, _) => FileStatus::Unchanged,
            (None, true, true) => FileStatus::WouldWrite,
            (None, true, false) => FileStatus::Written,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.result.is_failed()
    }
}

// ---------------------------------------------------------------------------
// apply / apply_all
// ---------------------------------------------------------------------------

impl<F: FileSystem> Reconciler<F> {
    /// Reconcile one file and fold any error into the report.
    pub fn apply(&self, desired: &DesiredState, dry_run: bool) -> FileReport {
        let result = match self.reconcile(desired, dry_run) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!("{err}");
                ReconciliationResult::from(&err)
            }
        };
        FileReport {
            path: desired.path.clone(),
            dry_run,
            checksum: sha256_hex(desired.content_bytes()),
            result,
        }
    }

    /// Reconcile each file in order, stopping after the first failure.
    ///
    /// The returned reports cover every file attempted; when a failure
    /// occurred it is the last report.
    pub fn apply_all(&self, files: &[DesiredState], dry_run: bool) -> Vec<FileReport> {
        let mut reports = Vec::with_capacity(files.len());
        for desired in files {
            let report = self.apply(desired, dry_run);
            let failed = report.is_failed();
            reports.push(report);
            if failed {
                break;
            }
        }
        reports
    }
}

/// Counts over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub changed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(reports: &[FileReport]) -> Self {
        reports.iter().fold(Summary::default(), |mut acc, r| {
            match r.status() {
                FileStatus::Written | FileStatus::WouldWrite => acc.changed += 1,
                FileStatus::Unchanged => acc.unchanged += 1,
                FileStatus::Failed => acc.failed += 1,
            }
            acc
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
