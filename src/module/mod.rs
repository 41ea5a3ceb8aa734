//! Module discovery and resolution
//!
//! This module handles:
//! - Describing a module directory as a [`ModuleInfo`] (via [`discovery`])
//! - The bundle directory naming convention (via [`naming`])
//! - Turning a descriptor into an overlay resolver, once, on first use ([`Module`])
//!
//! Discovery and resolution are separate stages. A `ModuleInfo` can be resolved
//! any number of times, with different bundle subsets, without rescanning the
//! module root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Serialize;

use crate::diagnostics::DiagnosticSink;
use crate::domain::{Bundle, Discovered, ResourceType};
use crate::engine::{EngineClass, EngineInfo};
use crate::error::{
    Result,
    module::already_resolved,
    resource::bundle_not_found,
};
use crate::path::PathForm;
use crate::resolver::ResourceResolver;
use crate::resource::DirectoryProvider;

pub mod discovery;
pub mod naming;

pub use discovery::{ModuleDiscoverer, discover_module};
pub use naming::BundleName;

/// A bundle directory found under a module root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleArtifact {
    /// Directory name, used as the bundle name
    pub name: String,

    /// Base part of the directory name
    pub base: String,

    /// Language code parsed from the directory name suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    pub physical_path: PathBuf,

    pub priority: i32,

    /// Search pattern selecting the bundle's resources
    pub pattern: String,

    /// Type of resource the pattern selects; `None` for mixed content
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
}

impl BundleArtifact {
    /// Open the bundle for scanning
    pub fn materialize(&self) -> Result<Bundle<DirectoryProvider>> {
        let provider = DirectoryProvider::with_pattern(&self.physical_path, &self.pattern)?;
        Ok(Bundle::new(
            self.name.clone(),
            self.physical_path.clone(),
            self.priority,
            provider,
        ))
    }
}

/// Structured description of a module directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    /// Module root directory name
    pub name: String,

    pub physical_path: PathBuf,

    /// Engine classification evidence
    pub engine: EngineInfo,

    /// The `.arz` database directly under the root
    pub database: Discovered<PathBuf>,

    /// Bundle directories, ordered by name
    pub bundles: Vec<BundleArtifact>,

    /// Form resource paths take when the module is resolved
    #[serde(skip)]
    pub path_form: PathForm,
}

impl ModuleInfo {
    pub fn engine_class(&self) -> Option<EngineClass> {
        self.engine.engine_class()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.engine.is_ambiguous()
    }

    /// The database artifact, if exactly one was found
    pub fn database_path(&self) -> Option<&Path> {
        self.database.found().map(PathBuf::as_path)
    }

    pub fn bundle(&self, name: &str) -> Option<&BundleArtifact> {
        self.bundles
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Open every bundle accepted by `filter`
    pub fn materialize_bundles(
        &self,
        mut filter: impl FnMut(&BundleArtifact) -> bool,
    ) -> Result<Vec<Bundle<DirectoryProvider>>> {
        self.bundles
            .iter()
            .filter(|b| filter(b))
            .map(BundleArtifact::materialize)
            .collect()
    }

    /// Build a fresh resolver over every bundle
    pub fn resolve(&self, form: PathForm, sink: &mut dyn DiagnosticSink) -> Result<ResourceResolver> {
        ResourceResolver::build_with_form(self.materialize_bundles(|_| true)?, form, sink)
    }
}

/// A discovered module that resolves its bundles on first use
///
/// Bundles can be excluded until the resolver is built; after that the bundle
/// set is fixed and a different subset needs a new `Module`.
#[derive(Debug)]
pub struct Module {
    info: ModuleInfo,
    form: PathForm,
    excluded: BTreeSet<String>,
    resolver: OnceLock<ResourceResolver>,
    build: Mutex<()>,
}

impl Module {
    /// Resolve with the path form the module was discovered with
    pub fn new(info: ModuleInfo) -> Self {
        let form = info.path_form;
        Self::with_form(info, form)
    }

    pub fn with_form(info: ModuleInfo, form: PathForm) -> Self {
        Self {
            info,
            form,
            excluded: BTreeSet::new(),
            resolver: OnceLock::new(),
            build: Mutex::new(()),
        }
    }

    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn is_resolved(&self) -> bool {
        self.resolver.get().is_some()
    }

    /// Leave a bundle out of resolution
    ///
    /// Fails with `ModuleAlreadyResolved` once the resolver exists and with
    /// `BundleNotFound` for a name the module does not have.
    pub fn exclude_bundle(&mut self, name: &str) -> Result<()> {
        if self.is_resolved() {
            return Err(already_resolved(self.info.name.clone()));
        }
        let bundle = self.info.bundle(name).ok_or_else(|| bundle_not_found(name))?;
        self.excluded.insert(bundle.name.clone());
        Ok(())
    }

    /// Bundles that take part in resolution
    pub fn active_bundles(&self) -> impl Iterator<Item = &BundleArtifact> {
        self.info
            .bundles
            .iter()
            .filter(|b| !self.excluded.contains(&b.name))
    }

    /// The module's resolver, built on first call
    ///
    /// Diagnostics are reported to `sink` only by the call that builds. Concurrent
    /// first callers wait for that build instead of starting their own.
    pub fn resolver(&self, sink: &mut dyn DiagnosticSink) -> Result<&ResourceResolver> {
        if let Some(resolver) = self.resolver.get() {
            return Ok(resolver);
        }

        let _guard = self.build.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(resolver) = self.resolver.get() {
            return Ok(resolver);
        }

        let bundles = self
            .info
            .materialize_bundles(|b| !self.excluded.contains(&b.name))?;
        tracing::debug!(module = %self.info.name, bundles = bundles.len(), "resolving module");
        let built = ResourceResolver::build_with_form(bundles, self.form, sink)?;
        Ok(self.resolver.get_or_init(|| built))
    }
}
