//! Physical path normalization for module and bundle roots
//!
//! Resource identifiers are normalized by [`crate::path`]; this module handles the
//! filesystem side: canonicalizing roots so discovery results are comparable, and
//! turning files found under a root into forward-slash relative strings.

use normpath::PathExt;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs::io_error_at, module};

/// Normalizer for physical paths under one root directory
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    root: PathBuf,
}

impl PathNormalizer {
    /// Create a normalizer for an existing directory
    ///
    /// Fails with `ModuleRootNotFound` when `root` does not exist and with
    /// `NotADirectory` when it is a file.
    pub fn for_root(root: &Path) -> Result<Self> {
        Ok(Self {
            root: normalize_root(root)?,
        })
    }

    /// The canonical root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a path relative to the root as a forward-slash string
    ///
    /// Returns `None` if the path is not under the root or is the root itself.
    pub fn relative_from_root(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let rel = to_normalized_str(rel);
        if rel.is_empty() { None } else { Some(rel) }
    }
}

/// Canonicalize an existing directory
///
/// Resolves symlinks and, on Windows, verbatim prefixes, so two spellings of the
/// same module root compare equal.
pub fn normalize_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(module::root_not_found(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(module::not_a_directory(path.display().to_string()));
    }

    path.normalize()
        .map(|norm| norm.into_path_buf())
        .map_err(|e| io_error_at(path, &e))
}

/// Convert a path to its forward-slash string representation
pub fn to_normalized_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
