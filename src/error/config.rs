//! Configuration errors

use super::PatchError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PatchError {
    PatchError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PatchError {
    PatchError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PatchError {
    PatchError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
