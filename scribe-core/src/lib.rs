//! Scribe core library — domain types, manifest loading, errors.
//!
//! - [`types`] — desired/observed state and reconciliation results
//! - [`error`] — [`ManifestError`]
//! - [`manifest`] — YAML manifest of files to reconcile

pub mod error;
pub mod manifest;
pub mod types;

pub use error::ManifestError;
pub use manifest::Manifest;
pub use types::{DesiredState, ErrorInfo, ErrorKind, ObservedState, ReconciliationResult};
