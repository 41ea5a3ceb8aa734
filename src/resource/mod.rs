//! Resource providers
//!
//! A provider answers two questions about one content root: what resources does it
//! hold, and does it hold a given path. The overlay resolver scans providers with
//! [`ResourceProvider::select_all`]; engine fingerprinting probes them with
//! [`ResourceProvider::try_get_by_path`].
//!
//! [`DirectoryProvider`] is the local-filesystem implementation. Lookups are
//! case-insensitive so that probes match regardless of how a mod author cased
//! their folders.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::path_normalizer::{PathNormalizer, to_normalized_str};
use crate::error::{Result, fs::io_error_at, path::invalid_pattern};
use crate::path::{ResourcePath, fold_case};

/// Pattern selecting every file under a root
pub const MATCH_ALL: &str = "**/*";

/// A resource as reported by a provider, before overlay resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedResource {
    /// Path relative to the provider root, spelled the way the provider found it
    pub raw_path: String,

    /// File backing the resource
    pub physical_location: PathBuf,
}

/// Capability interface for a source of resources
pub trait ResourceProvider {
    /// Every resource this provider holds, in a stable order
    fn select_all(&self) -> Result<Vec<ProvidedResource>>;

    /// Look up one resource by normalized path
    fn try_get_by_path(&self, path: &ResourcePath) -> Result<Option<ProvidedResource>>;
}

/// Provider over a directory tree, filtered by a search pattern
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    normalizer: PathNormalizer,
    pattern: String,
}

impl DirectoryProvider {
    /// Provider over every file under `root`
    pub fn new(root: &Path) -> Result<Self> {
        Self::with_pattern(root, MATCH_ALL)
    }

    /// Provider over files under `root` whose relative path matches `pattern`
    ///
    /// Patterns are matched case-insensitively against forward-slash relative paths.
    pub fn with_pattern(root: &Path, pattern: &str) -> Result<Self> {
        let pattern = fold_case(pattern);
        Glob::new(&pattern).map_err(|e| invalid_pattern(pattern.clone(), e))?;

        Ok(Self {
            normalizer: PathNormalizer::for_root(root)?,
            pattern,
        })
    }

    pub fn root(&self) -> &Path {
        self.normalizer.root()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, glob: &Glob<'_>, relative: &str) -> bool {
        let folded = fold_case(relative);
        let candidate = CandidatePath::from(folded.as_str());
        glob.matched(&candidate).is_some()
    }

    fn glob(&self) -> Result<Glob<'_>> {
        Glob::new(&self.pattern).map_err(|e| invalid_pattern(self.pattern.clone(), e))
    }

    /// Find a child of `dir` whose name equals `segment` ignoring case
    ///
    /// An exact match wins. Otherwise the lexicographically smallest
    /// case-insensitive match is taken, the same entry a sorted scan meets first.
    fn find_child(dir: &Path, segment: &str) -> Result<Option<PathBuf>> {
        let direct = dir.join(segment);
        if direct.exists() {
            return Ok(Some(direct));
        }
        if !dir.is_dir() {
            return Ok(None);
        }

        let folded = fold_case(segment);
        let mut best: Option<(String, PathBuf)> = None;
        for entry in fs::read_dir(dir).map_err(|e| io_error_at(dir, &e))? {
            let entry = entry.map_err(|e| io_error_at(dir, &e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if fold_case(&name) != folded {
                continue;
            }
            if best.as_ref().is_none_or(|(current, _)| name < *current) {
                best = Some((name, entry.path()));
            }
        }
        Ok(best.map(|(_, path)| path))
    }
}

impl ResourceProvider for DirectoryProvider {
    fn select_all(&self) -> Result<Vec<ProvidedResource>> {
        let glob = self.glob()?;
        let mut resources = Vec::new();

        for entry in WalkDir::new(self.root())
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = self.normalizer.relative_from_root(entry.path()) else {
                continue;
            };
            if !self.matches(&glob, &relative) {
                continue;
            }
            resources.push(ProvidedResource {
                raw_path: relative,
                physical_location: entry.into_path(),
            });
        }

        tracing::debug!(
            root = %self.root().display(),
            pattern = %self.pattern,
            count = resources.len(),
            "scanned directory provider"
        );
        Ok(resources)
    }

    fn try_get_by_path(&self, path: &ResourcePath) -> Result<Option<ProvidedResource>> {
        let glob = self.glob()?;
        if !self.matches(&glob, path.as_str()) {
            return Ok(None);
        }

        let mut current = self.root().to_path_buf();
        for segment in path.as_str().split(['/', '\\']) {
            match Self::find_child(&current, segment)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        if !current.is_file() {
            return Ok(None);
        }

        let raw_path = current
            .strip_prefix(self.root())
            .map_or_else(|_| path.to_string(), to_normalized_str);
        Ok(Some(ProvidedResource {
            raw_path,
            physical_location: current,
        }))
    }
}
