//! Error types for scribe-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file did not exist at the given path.
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than a missing file.
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The manifest parsed but describes something that cannot be reconciled.
    #[error("invalid manifest at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
