//! Bundle domain types
//!
//! A **Bundle** is a named, prioritized root of resource artifacts. Higher
//! priority bundles override lower priority ones in the merged namespace.

use std::path::{Path, PathBuf};

use crate::resource::ResourceProvider;

/// A named, prioritized content root
///
/// Immutable once constructed. The provider answers which resources exist under
/// the root; the bundle itself owns no shared state.
#[derive(Debug, Clone)]
pub struct Bundle<P> {
    name: String,
    physical_root: PathBuf,
    priority: i32,
    provider: P,
}

impl<P: ResourceProvider> Bundle<P> {
    /// Create a new bundle
    pub fn new(
        name: impl Into<String>,
        physical_root: impl Into<PathBuf>,
        priority: i32,
        provider: P,
    ) -> Self {
        Self {
            name: name.into(),
            physical_root: physical_root.into(),
            priority,
            provider,
        }
    }

    /// Bundle name, used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn physical_root(&self) -> &Path {
        &self.physical_root
    }

    /// Ordering priority; higher wins
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
