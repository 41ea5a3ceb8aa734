//! Test fixtures for building module trees on disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_module, create_temp_dir, write_file};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     write_file(temp.path(), "resources/a.tpl", "");
//!
//!     let (temp, root) = create_module("mymod", &[
//!         ("mymod.arz", ""),
//!         ("templates/database/templates/itemartifact.tpl", ""),
//!     ]);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file below `base`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be created.
pub fn write_file(base: &Path, relative: &str, content: &str) -> PathBuf {
    let full_path = base.join(relative);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write test file");
    full_path
}

/// Create a module directory named `name` inside a fresh temp directory.
///
/// Takes a list of (path, content) tuples relative to the module root.
/// Returns the `TempDir` (which cleans up on drop) and the module root.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_module(name: &str, files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().join(name);
    std::fs::create_dir_all(&root).expect("Failed to create module root");
    for (path, content) in files {
        write_file(&root, path, content);
    }
    (temp, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let temp = create_temp_dir();
        let file = write_file(temp.path(), "a/b/c.tpl", "x");
        assert_eq!(std::fs::read_to_string(file).unwrap(), "x");
    }

    #[test]
    fn test_create_module() {
        let (_temp, root) = create_module("mymod", &[("mymod.arz", ""), ("text/tags.txt", "")]);
        assert!(root.ends_with("mymod"));
        assert!(root.join("mymod.arz").is_file());
        assert!(root.join("text/tags.txt").is_file());
    }
}
