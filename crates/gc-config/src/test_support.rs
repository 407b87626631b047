//! Shared filesystem fixtures for gc-config unit tests.
//!
//! Kept behind `cfg(test)` so the fixture never leaks into the public API.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree for exercising discovery, merging, and path
/// resolution.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// The sandbox root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a nested directory and returns its path.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let dir = self.root.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes a `.gharconnect.toml` with the given contents under `rel`,
    /// creating directories as needed. Pass `""` for the sandbox root.
    pub fn write_config(&self, rel: &str, contents: &str) -> PathBuf {
        let dir = if rel.is_empty() {
            self.root.path().to_path_buf()
        } else {
            self.mkdir(rel)
        };
        let file = dir.join(CONFIG_FILENAME);
        fs::write(&file, contents).unwrap();
        file
    }
}
