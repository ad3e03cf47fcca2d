//! Scratch data roots for tests that need real files on disk.

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Creates an empty file at `root/relative`, including parent directories.
///
/// Useful for presence checks and extension gates, which never read the
/// file contents.
pub fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&path, b"").expect("Failed to create file");
    path
}
