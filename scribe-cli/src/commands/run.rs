//! `scribe run` — reconcile every file in a manifest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use scribe_core::manifest;
use scribe_sync::{FileReport, Reconciler, Summary};

use super::output;

/// Arguments for `scribe run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the YAML manifest.
    pub manifest: PathBuf,

    /// Report what would change without writing anything. Overrides the
    /// manifest's own `dry_run` when set.
    #[arg(long, visible_alias = "check")]
    pub dry_run: bool,

    /// Emit a machine-readable JSON report.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    summary: Summary,
    files: &'a [FileReport],
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let manifest = manifest::load(&self.manifest)
            .with_context(|| format!("cannot run {}", self.manifest.display()))?;
        let dry_run = self.dry_run || manifest.dry_run;

        if manifest.files.is_empty() && !self.json {
            println!("No files listed in {}.", self.manifest.display());
            return Ok(());
        }

        let reports = Reconciler::new().apply_all(&manifest.files, dry_run);
        let summary = Summary::of(&reports);

        if self.json {
            output::print_json(&RunReport {
                summary,
                files: &reports,
            })?;
        } else {
            output::print_reports(&reports, dry_run);
            output::print_summary(&summary, dry_run);
        }
        output::fail_on_error(&reports)
    }
}
