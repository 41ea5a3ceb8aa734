//! File system errors

use std::path::Path;

use super::PatchError;

/// Wraps an IO error with the path it occurred on
pub fn io_error_at(path: &Path, err: &std::io::Error) -> PatchError {
    PatchError::IoError {
        message: format!("{}: {}", path.display(), err),
    }
}
