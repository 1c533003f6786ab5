//! YAML manifest listing files to reconcile.
//!
//! ```yaml
//! dry_run: false
//! files:
//!   - path: test.txt
//!     content: Hello World
//!   - path: empty.txt
//! ```
//!
//! Relative entry paths are resolved against the manifest's own directory,
//! so a manifest behaves the same regardless of the caller's working
//! directory.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::types::DesiredState;

/// A batch of desired file states, applied in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub files: Vec<DesiredState>,
}

/// Load and validate the manifest at `path`.
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut manifest: Manifest =
        serde_yaml::from_str(&contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for (index, file) in manifest.files.iter_mut().enumerate() {
        if file.path.as_os_str().is_empty() {
            return Err(ManifestError::Invalid {
                path: path.to_path_buf(),
                reason: format!("files[{index}] has an empty path"),
            });
        }
        if file.path.is_relative() {
            file.path = base.join(&file.path);
        }
    }

    Ok(manifest)
}
