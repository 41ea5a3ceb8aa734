//! Engine detection by fingerprint probing

use std::path::Path;

use crate::domain::Discovered;
use crate::error::Result;
use crate::resource::{DirectoryProvider, ResourceProvider};

use super::{DEFAULT_FINGERPRINTS, EngineArtifact, EngineClass, EngineInfo, Fingerprint};

/// Classifies content by probing a fixed, ordered fingerprint table
///
/// Stateless apart from its table; one discoverer can be shared across threads
/// and used for any number of directories.
#[derive(Debug, Clone)]
pub struct EngineDiscoverer {
    fingerprints: Vec<Fingerprint>,
}

impl EngineDiscoverer {
    /// Create a discoverer with the given fingerprint table
    pub fn new(fingerprints: Vec<Fingerprint>) -> Self {
        Self { fingerprints }
    }

    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    /// Probe the directory tree at `physical_path`
    ///
    /// Probes are case-insensitive existence checks. A missing root is an error;
    /// finding no fingerprint is not.
    pub fn discover(&self, physical_path: &Path) -> Result<EngineInfo> {
        let provider = DirectoryProvider::new(physical_path)?;
        self.probe(provider.root(), &provider)
    }

    /// Probe any provider, such as a merged module namespace
    pub fn probe(&self, physical_path: &Path, provider: &dyn ResourceProvider) -> Result<EngineInfo> {
        self.probe_layers(physical_path, &[provider])
    }

    /// Probe several providers without merging them
    ///
    /// A fingerprint matches when any layer holds it; the first layer that does
    /// supplies the recorded artifact.
    pub fn probe_layers(
        &self,
        physical_path: &Path,
        layers: &[&dyn ResourceProvider],
    ) -> Result<EngineInfo> {
        let mut artifacts = Vec::new();
        for fingerprint in &self.fingerprints {
            for layer in layers {
                let Some(hit) = layer.try_get_by_path(&fingerprint.path)? else {
                    continue;
                };
                tracing::debug!(
                    path = %fingerprint.path,
                    engine = %fingerprint.engine,
                    "fingerprint matched"
                );
                artifacts.push(EngineArtifact {
                    path: fingerprint.path.clone(),
                    engine: fingerprint.engine,
                    physical_location: hit.physical_location,
                });
                break;
            }
        }

        let classification = classify(&artifacts);
        Ok(EngineInfo {
            physical_path: physical_path.to_path_buf(),
            artifacts,
            classification,
        })
    }
}

impl Default for EngineDiscoverer {
    fn default() -> Self {
        let mut fingerprints = Vec::with_capacity(DEFAULT_FINGERPRINTS.len());
        for (path, engine) in DEFAULT_FINGERPRINTS {
            match Fingerprint::new(path, *engine) {
                Ok(fingerprint) => fingerprints.push(fingerprint),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "skipping invalid fingerprint");
                }
            }
        }
        Self::new(fingerprints)
    }
}

/// Distinct engine classes among the hits decide the outcome
fn classify(artifacts: &[EngineArtifact]) -> Discovered<EngineClass> {
    let mut engines: Vec<EngineClass> = Vec::new();
    for artifact in artifacts {
        if !engines.contains(&artifact.engine) {
            engines.push(artifact.engine);
        }
    }
    Discovered::from_candidates(engines)
}

/// Probe `physical_path` with the default fingerprint table
pub fn discover_engine(physical_path: &Path) -> Result<EngineInfo> {
    EngineDiscoverer::default().discover(physical_path)
}
