//! Test utilities for building throwaway directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Provides methods for creating files of a given size, subdirectories,
/// and symlinks. The tree is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file holding `size_bytes` bytes of filler.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size_bytes: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'a'; size_bytes]).expect("Failed to write file");
        full_path
    }

    /// Create a (possibly nested) subdirectory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink named `name` pointing at `target`, both relative
    /// to the tree root.
    #[cfg(unix)]
    pub fn add_symlink(&self, name: &str, target: &str) -> PathBuf {
        let link = self.dir.path().join(name);
        let target = self.dir.path().join(target);
        std::os::unix::fs::symlink(target, &link).expect("Failed to create symlink");
        link
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
