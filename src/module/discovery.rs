//! Module discovery
//!
//! Describes a module directory without merging anything:
//! - `.arz` database files directly under the root
//! - Immediate subdirectories as bundles, per the naming convention
//! - The engine class, by probing the bundles and the root for fingerprints

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::path_normalizer::PathNormalizer;
use crate::config::{DiscoveryOptions, ModuleConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::Discovered;
use crate::engine::{EngineDiscoverer, EngineInfo};
use crate::error::Result;
use crate::language::{LanguageProvider, LanguageRegistry};
use crate::resource::{DirectoryProvider, ResourceProvider};

use super::naming::{BundleName, infer_resource_type};
use super::{BundleArtifact, ModuleInfo};

/// Extension of the master database artifact
const DATABASE_EXTENSION: &str = "arz";

/// Discovers modules using a language provider and an engine fingerprint table
///
/// Holds no per-module state; one discoverer can describe any number of
/// directories, concurrently if `L` allows it.
#[derive(Debug, Clone)]
pub struct ModuleDiscoverer<L = LanguageRegistry> {
    languages: L,
    engines: EngineDiscoverer,
    options: DiscoveryOptions,
}

impl Default for ModuleDiscoverer {
    fn default() -> Self {
        Self::new(LanguageRegistry::with_defaults())
    }
}

impl<L: LanguageProvider> ModuleDiscoverer<L> {
    pub fn new(languages: L) -> Self {
        Self {
            languages,
            engines: EngineDiscoverer::default(),
            options: DiscoveryOptions::default(),
        }
    }

    pub fn with_engines(mut self, engines: EngineDiscoverer) -> Self {
        self.engines = engines;
        self
    }

    pub fn with_options(mut self, options: DiscoveryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DiscoveryOptions {
        &self.options
    }

    /// Describe the module rooted at `physical_path`
    ///
    /// A missing root or unreadable directory is an error. Several databases and
    /// an ambiguous engine are reported to `sink` and recorded in the result.
    pub fn discover(
        &self,
        physical_path: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ModuleInfo> {
        let normalizer = PathNormalizer::for_root(physical_path)?;
        let root = normalizer.root().to_path_buf();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let config = ModuleConfig::load(&root, &self.options.config_file_name)?.unwrap_or_default();

        let mut databases = Vec::new();
        let mut bundles = Vec::new();
        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_file() {
                if is_database(entry.path()) {
                    databases.push(entry.into_path());
                }
                continue;
            }
            if !entry.file_type().is_dir() || file_name.starts_with('.') {
                continue;
            }
            if config.is_excluded(&file_name) {
                tracing::debug!(bundle = %file_name, "excluded by configuration");
                continue;
            }

            bundles.push(self.bundle_artifact(file_name, entry.into_path(), &config));
        }

        let database = Discovered::from_candidates(databases);
        if let Discovered::Ambiguous(candidates) = &database {
            sink.report(
                Diagnostic::multiple_databases(&name, candidates.len()).with_location(&root),
            );
        }

        let engine = match config.engine {
            Some(engine) => EngineInfo::forced(&root, engine),
            None => self.probe_engine(&root, &bundles)?,
        };
        if let Discovered::Ambiguous(engines) = &engine.classification {
            let engines: Vec<String> = engines.iter().map(ToString::to_string).collect();
            sink.report(Diagnostic::ambiguous_engine(&name, &engines).with_location(&root));
        }

        tracing::debug!(
            module = %name,
            bundles = bundles.len(),
            engine = ?engine.engine_class(),
            "discovered module"
        );

        Ok(ModuleInfo {
            name,
            physical_path: root,
            engine,
            database,
            bundles,
            path_form: self.options.path_form,
        })
    }

    fn bundle_artifact(
        &self,
        dir_name: String,
        physical_path: PathBuf,
        config: &ModuleConfig,
    ) -> BundleArtifact {
        let parsed = BundleName::parse(&dir_name, &self.languages);
        let priority = config
            .priority_for(&dir_name)
            .unwrap_or_else(|| parsed.inferred_priority());
        let pattern = config
            .pattern_for(&parsed.base)
            .unwrap_or_else(|| parsed.default_pattern())
            .to_string();

        BundleArtifact {
            resource_type: infer_resource_type(&pattern),
            name: dir_name,
            base: parsed.base,
            language: parsed.language,
            physical_path,
            priority,
            pattern,
        }
    }

    /// Probe bundles from highest priority down, then the root itself
    fn probe_engine(&self, root: &Path, bundles: &[BundleArtifact]) -> Result<EngineInfo> {
        let mut ordered: Vec<&BundleArtifact> = bundles.iter().collect();
        ordered.sort_by_key(|b| std::cmp::Reverse(b.priority));

        let mut providers = Vec::with_capacity(ordered.len() + 1);
        for bundle in ordered {
            providers.push(DirectoryProvider::with_pattern(
                &bundle.physical_path,
                &bundle.pattern,
            )?);
        }
        providers.push(DirectoryProvider::new(root)?);

        let layers: Vec<&dyn ResourceProvider> = providers
            .iter()
            .map(|p| p as &dyn ResourceProvider)
            .collect();
        self.engines.probe_layers(root, &layers)
    }
}

fn is_database(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(DATABASE_EXTENSION))
}

/// Describe the module at `physical_path` with the default languages and fingerprints
pub fn discover_module(physical_path: &Path, sink: &mut dyn DiagnosticSink) -> Result<ModuleInfo> {
    ModuleDiscoverer::default().discover(physical_path, sink)
}
