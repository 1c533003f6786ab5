//! # scribe-sync
//!
//! Read-compare-write reconciliation of single files.
//!
//! Call [`reconcile`] to bring one file on the real filesystem into its
//! desired state, or build a [`Reconciler`] over a custom [`FileSystem`].
//! [`Reconciler::apply_all`] processes a batch in order and produces
//! [`FileReport`]s.

pub mod checksum;
pub mod error;
pub mod fs;
pub mod reconciler;
pub mod runner;

pub use error::ReconcileError;
pub use fs::{FileSystem, OsFileSystem};
pub use reconciler::{reconcile, ReadOutcome, Reconciler};
pub use runner::{FileReport, FileStatus, Summary};
