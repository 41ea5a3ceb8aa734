//! Error types and handling for arzpatch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`path`]: Resource path normalization errors
//! - [`resource`]: Resource lookup errors
//! - [`module`]: Module discovery and resolution errors
//! - [`language`]: Language registry errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! Override conflicts and ambiguous engine classification are not errors;
//! they are reported through [`crate::diagnostics`] and the discovery result values.

pub mod config;
pub mod fs;
pub mod language;
pub mod module;
pub mod path;
pub mod resource;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for arzpatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum PatchError {
    // Path errors
    #[error("Invalid resource path '{path}': {reason}")]
    #[diagnostic(
        code(arzpatch::path::invalid),
        help("Resource paths are relative to a bundle root and may not contain '..' segments")
    )]
    InvalidPath { path: String, reason: String },

    #[error("Invalid search pattern '{pattern}': {reason}")]
    #[diagnostic(code(arzpatch::path::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Resource errors
    #[error("Resource '{path}' not found")]
    #[diagnostic(
        code(arzpatch::resource::not_found),
        help("Use a non-failing lookup if the resource is optional")
    )]
    ResourceNotFound { path: String },

    #[error("Bundle '{name}' not found")]
    #[diagnostic(code(arzpatch::resource::bundle_not_found))]
    BundleNotFound { name: String },

    // Module errors
    #[error("Module root not found: {path}")]
    #[diagnostic(
        code(arzpatch::module::root_not_found),
        help("Pass the directory that contains the module database and its resource folders")
    )]
    ModuleRootNotFound { path: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(code(arzpatch::module::not_a_directory))]
    NotADirectory { path: String },

    #[error("Module '{name}' is already resolved; its bundle set can no longer change")]
    #[diagnostic(
        code(arzpatch::module::already_resolved),
        help("Create a new module from the same descriptor to resolve a different bundle set")
    )]
    ModuleAlreadyResolved { name: String },

    // Language errors
    #[error("Language '{code}' is already registered")]
    #[diagnostic(code(arzpatch::language::already_registered))]
    LanguageAlreadyRegistered { code: String },

    #[error("Invalid language code: '{code}'")]
    #[diagnostic(
        code(arzpatch::language::invalid_code),
        help("Language codes are short ASCII alphanumeric suffixes such as 'fr' or 'cz'")
    )]
    InvalidLanguageCode { code: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(arzpatch::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(arzpatch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(arzpatch::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(arzpatch::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PatchError {
    fn from(err: std::io::Error) -> Self {
        PatchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for PatchError {
    fn from(err: walkdir::Error) -> Self {
        let message = match err.path() {
            Some(path) => format!("{}: {}", path.display(), err),
            None => err.to_string(),
        };
        PatchError::IoError { message }
    }
}

impl From<serde_yaml::Error> for PatchError {
    fn from(err: serde_yaml::Error) -> Self {
        PatchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PatchError {
    fn from(err: serde_json::Error) -> Self {
        PatchError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PatchError>;
