//! Manifest loading: path resolution, defaults, and error messages.

use std::path::PathBuf;

use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use scribe_core::{manifest, DesiredState, ManifestError};

fn write_manifest(dir: &assert_fs::TempDir, yaml: &str) -> PathBuf {
    let file = dir.child("scribe.yaml");
    file.write_str(yaml).expect("write manifest");
    file.path().to_path_buf()
}

// ---------------------------------------------------------------------------
// 1. Successful loads
// ---------------------------------------------------------------------------

#[test]
fn relative_paths_resolve_against_manifest_dir() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        "files:\n  - path: test.txt\n    content: Hello World\n",
    );

    let loaded = manifest::load(&path).expect("load");
    assert!(!loaded.dry_run);
    assert_eq!(
        loaded.files,
        vec![DesiredState::new(dir.path().join("test.txt"), "Hello World")]
    );
}

#[test]
fn absolute_paths_are_kept_verbatim() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let target = dir.path().join("nested").join("abs.txt");
    let yaml = format!("files:\n  - path: {}\n    content: x\n", target.display());
    let path = write_manifest(&dir, &yaml);

    let loaded = manifest::load(&path).expect("load");
    assert_eq!(loaded.files[0].path, target);
}

#[test]
fn missing_content_defaults_to_empty_string() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, "dry_run: true\nfiles:\n  - path: empty.txt\n");

    let loaded = manifest::load(&path).expect("load");
    assert!(loaded.dry_run);
    assert_eq!(loaded.files[0].content, "");
}

#[test]
fn entries_keep_declaration_order() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(
        &dir,
        "files:\n  - path: b.txt\n  - path: a.txt\n  - path: c.txt\n",
    );

    let loaded = manifest::load(&path).expect("load");
    let names: Vec<_> = loaded
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["b.txt", "a.txt", "c.txt"]);
}

#[test]
fn loading_does_not_touch_target_files() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, "files:\n  - path: untouched.txt\n    content: x\n");

    manifest::load(&path).expect("load");
    dir.child("untouched.txt").assert(predicate::path::missing());
}

// ---------------------------------------------------------------------------
// 2. Errors
// ---------------------------------------------------------------------------

#[test]
fn missing_manifest_returns_not_found() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = manifest::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::NotFound { .. }), "got: {err}");
    assert!(predicate::str::contains("nope.yaml").eval(&err.to_string()));
}

#[rstest]
#[case::unknown_top_level_key("files: []\nfilez: []\n")]
#[case::unknown_entry_key("files:\n  - path: a.txt\n    contents: typo\n")]
#[case::entry_without_path("files:\n  - content: orphan\n")]
#[case::files_not_a_list("files: a.txt\n")]
fn malformed_manifest_returns_parse_error(#[case] yaml: &str) {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, yaml);

    let err = manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("scribe.yaml"), "must name the file: {err}");
}

#[test]
fn empty_entry_path_is_rejected() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = write_manifest(&dir, "files:\n  - path: ok.txt\n  - path: \"\"\n");

    let err = manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Invalid { .. }), "got: {err}");
    assert!(err.to_string().contains("files[1]"), "got: {err}");
}

#[test]
#[cfg(unix)]
fn directory_as_manifest_returns_io_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let err = manifest::load(dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }), "got: {err}");
}
