//! Resource lookup errors

use super::PatchError;

/// Creates a resource not found error
pub fn not_found(path: impl Into<String>) -> PatchError {
    PatchError::ResourceNotFound { path: path.into() }
}

/// Creates a bundle not found error
pub fn bundle_not_found(name: impl Into<String>) -> PatchError {
    PatchError::BundleNotFound { name: name.into() }
}
