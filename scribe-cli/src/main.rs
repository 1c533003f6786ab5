//! Scribe — reconcile text files to their desired content.
//!
//! # Usage
//!
//! ```text
//! scribe apply <path> [--content <text> | --content-file <file>] [--dry-run] [--json]
//! scribe run <manifest.yaml> [--dry-run] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{apply::ApplyArgs, run::RunArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scribe",
    version,
    about = "Create or overwrite text files so they hold exactly the desired content",
    long_about = None,
)]
struct Cli {
    /// Log each decision (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile a single file.
    Apply(ApplyArgs),

    /// Reconcile every file listed in a YAML manifest, in order.
    Run(RunArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Apply(args) => args.run(),
        Commands::Run(args) => args.run(),
    }
}
