//! Shared human and JSON rendering of file reports.

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;

use scribe_sync::{FileReport, FileStatus, Summary};

pub fn print_reports(reports: &[FileReport], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    for r in reports {
        let path = r.path.display();
        match r.status() {
            FileStatus::Written => println!("{prefix}  {}  {path}", "✎".green().bold()),
            FileStatus::WouldWrite => println!("{prefix}  {}  {path}", "~".yellow().bold()),
            FileStatus::Unchanged => println!("{prefix}  {}  {path}", "·".bright_black()),
            FileStatus::Failed => println!("{prefix}  {}  {path}", "✗".red().bold()),
        }
    }
}

pub fn print_summary(summary: &Summary, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let failed = if summary.failed > 0 {
        format!(", {} failed", summary.failed)
    } else {
        String::new()
    };
    println!(
        "{prefix}{} changed, {} unchanged{failed}",
        summary.changed, summary.unchanged
    );
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Turn the first failed report into a command error.
pub fn fail_on_error(reports: &[FileReport]) -> Result<()> {
    if let Some(err) = reports.iter().find_map(|r| r.result.error.as_ref()) {
        bail!("{err}");
    }
    Ok(())
}
