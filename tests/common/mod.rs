//! Common test utilities for arzpatch integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A module directory for integration tests
#[allow(dead_code)]
pub struct TestModule {
    /// Temporary directory holding the module
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the module root
    pub path: PathBuf,
}

impl TestModule {
    /// Create an empty module named `name`
    pub fn new(name: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create module root");
        Self { temp, path }
    }

    /// Write a file below the module root
    pub fn write_file(&self, path: &str, content: &str) -> &Self {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        self
    }

    /// Write a file inside a bundle directory
    #[allow(dead_code)]
    pub fn write_resource(&self, bundle: &str, path: &str, content: &str) -> &Self {
        self.write_file(&format!("{bundle}/{path}"), content)
    }

    /// Path to a file below the module root
    #[allow(dead_code)]
    pub fn file(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }
}
