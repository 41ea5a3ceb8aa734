//! Module discovery errors

use super::PatchError;

/// Creates a module root not found error
pub fn root_not_found(path: impl Into<String>) -> PatchError {
    PatchError::ModuleRootNotFound { path: path.into() }
}

/// Creates a not a directory error
pub fn not_a_directory(path: impl Into<String>) -> PatchError {
    PatchError::NotADirectory { path: path.into() }
}

/// Creates a module already resolved error
pub fn already_resolved(name: impl Into<String>) -> PatchError {
    PatchError::ModuleAlreadyResolved { name: name.into() }
}
