//! `scribe apply` — reconcile one file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use scribe_core::DesiredState;
use scribe_sync::Reconciler;

use super::output;

/// Arguments for `scribe apply`.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// File to create or overwrite.
    pub path: PathBuf,

    /// Desired file content (defaults to empty).
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the desired content from this file.
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long, visible_alias = "check")]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report.
    #[arg(long)]
    pub json: bool,
}

impl ApplyArgs {
    pub fn run(self) -> Result<()> {
        let content = match (&self.content, &self.content_file) {
            (Some(text), _) => text.clone(),
            (None, Some(file)) => std::fs::read_to_string(file)
                .with_context(|| format!("failed to read content file {}", file.display()))?,
            (None, None) => String::new(),
        };

        let desired = DesiredState::new(self.path, content);
        let report = Reconciler::new().apply(&desired, self.dry_run);
        let reports = [report];

        if self.json {
            output::print_json(&reports[0])?;
        } else {
            output::print_reports(&reports, self.dry_run);
        }
        output::fail_on_error(&reports)
    }
}
