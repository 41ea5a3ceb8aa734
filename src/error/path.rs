//! Resource path errors

use super::PatchError;

/// Creates an invalid path error
pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> PatchError {
    PatchError::InvalidPath {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid search pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> PatchError {
    PatchError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
