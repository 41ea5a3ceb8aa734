//! arzpatch - resource overlay resolver for ARZ game modules
//!
//! Describes a Titan Quest or Grim Dawn module directory and merges its
//! prioritized resource bundles into one namespace.
//!
//! The pipeline has two stages:
//! 1. [`module::discover_module`] scans a directory into a [`module::ModuleInfo`]:
//!    database artifact, bundle directories and the engine classification.
//! 2. [`resolver::ResourceResolver`] merges the bundles once; lookups are then
//!    pure reads and safe from any number of threads.
//!
//! Same-priority overrides and ambiguous engine fingerprints are never errors.
//! They are reported through [`diagnostics`] and the discovery result values.

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod engine;
pub mod error;
pub mod language;
pub mod module;
pub mod path;
pub mod resolver;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticId, DiagnosticSink, Severity};
pub use domain::{Bundle, Discovered, Resource, ResourceType};
pub use engine::{EngineClass, EngineDiscoverer, EngineInfo, discover_engine};
pub use error::{PatchError, Result};
pub use language::{LanguageProvider, LanguageRegistry};
pub use module::{BundleArtifact, Module, ModuleDiscoverer, ModuleInfo, discover_module};
pub use path::{PathForm, ResourcePath, normalize};
pub use resolver::ResourceResolver;
pub use resource::{DirectoryProvider, ProvidedResource, ResourceProvider};
