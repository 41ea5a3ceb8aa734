//! Language registry errors

use super::PatchError;

/// Creates a language already registered error
pub fn already_registered(code: impl Into<String>) -> PatchError {
    PatchError::LanguageAlreadyRegistered { code: code.into() }
}

/// Creates an invalid language code error
pub fn invalid_code(code: impl Into<String>) -> PatchError {
    PatchError::InvalidLanguageCode { code: code.into() }
}
