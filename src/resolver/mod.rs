//! Overlay resolution of prioritized bundles
//!
//! This module handles:
//! - Merging every bundle's resources into one namespace keyed by normalized path
//! - Letting higher-priority bundles override lower-priority ones
//! - Refusing same-priority overrides between different bundles and reporting them
//! - Answering lookups against the merged namespace
//!
//! # Placement rules
//!
//! Bundles are scanned from lowest to highest priority; equal priorities keep their
//! declaration order. For each resource found:
//!
//! 1. No entry yet for the path: place it.
//! 2. Existing entry has lower priority: replace it.
//! 3. Existing entry has the same priority and comes from another bundle: keep the
//!    existing entry and report `RES0001`. Equal priorities carry no ordering
//!    contract, so picking either would depend on enumeration order.
//! 4. Existing entry has higher priority: drop the new one silently.
//!
//! The merged map is built once; a resolver never changes after construction and
//! can be shared across threads for reading.

use std::collections::BTreeMap;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::domain::{Bundle, Resource, ResourceType};
use crate::error::{PatchError, Result, resource::not_found};
use crate::path::{PathForm, ResourcePath, fold_case, normalize};
use crate::resource::{DirectoryProvider, ProvidedResource, ResourceProvider};

/// A resource during merging, tagged with the index of its owning bundle
struct Placement {
    resource: Resource,
    bundle_index: usize,
}

/// Immutable merged view over a set of bundles
#[derive(Debug)]
pub struct ResourceResolver<P = DirectoryProvider> {
    bundles: Vec<Bundle<P>>,
    form: PathForm,
    resources: BTreeMap<ResourcePath, Resource>,
}

impl<P: ResourceProvider> ResourceResolver<P> {
    /// Merge `bundles` using the default resource path form
    ///
    /// Conflicts are reported to `sink`; filesystem failures abort the build.
    pub fn build(bundles: Vec<Bundle<P>>, sink: &mut dyn DiagnosticSink) -> Result<Self> {
        Self::build_with_form(bundles, PathForm::RESOURCE, sink)
    }

    /// Merge `bundles`, normalizing every resource path with `form`
    pub fn build_with_form(
        bundles: Vec<Bundle<P>>,
        form: PathForm,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self> {
        let mut order: Vec<usize> = (0..bundles.len()).collect();
        order.sort_by_key(|&idx| bundles[idx].priority());

        let mut merged: BTreeMap<ResourcePath, Placement> = BTreeMap::new();
        for idx in order {
            let bundle = &bundles[idx];
            let provided = bundle.provider().select_all()?;
            tracing::debug!(
                bundle = bundle.name(),
                priority = bundle.priority(),
                count = provided.len(),
                "merging bundle"
            );

            for entry in provided {
                place(&mut merged, bundle, idx, entry, form, sink);
            }
        }

        let resources = merged
            .into_iter()
            .map(|(path, placement)| (path, placement.resource))
            .collect();

        Ok(Self {
            bundles,
            form,
            resources,
        })
    }
}

impl<P> ResourceResolver<P> {
    /// Normalize a raw path the way this resolver keys its resources
    pub fn path(&self, raw: &str) -> Result<ResourcePath> {
        normalize(raw, self.form)
    }

    /// Look up a resource; `None` when no bundle defines it
    pub fn try_resolve(&self, path: &ResourcePath) -> Option<&Resource> {
        self.resources.get(path)
    }

    /// Look up a resource, yielding the absent value when no bundle defines it
    pub fn resolve_or_default(&self, path: &ResourcePath) -> Option<&Resource> {
        self.try_resolve(path)
    }

    /// Look up a resource that must exist
    ///
    /// Fails with `ResourceNotFound` when no bundle defines `path`.
    pub fn resolve(&self, path: &ResourcePath) -> Result<&Resource> {
        self.try_resolve(path)
            .ok_or_else(|| not_found(path.as_str()))
    }

    /// Every winning resource, ordered by normalized path
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Winning resources of one type, ordered by normalized path
    pub fn resources_of_type(&self, resource_type: ResourceType) -> impl Iterator<Item = &Resource> {
        self.resources
            .values()
            .filter(move |r| r.resource_type == resource_type)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Bundles this resolver was built from, in declaration order
    pub fn bundles(&self) -> &[Bundle<P>] {
        &self.bundles
    }

    pub fn form(&self) -> PathForm {
        self.form
    }
}

/// Apply the placement rules to one provided resource
fn place<P: ResourceProvider>(
    merged: &mut BTreeMap<ResourcePath, Placement>,
    bundle: &Bundle<P>,
    bundle_index: usize,
    entry: ProvidedResource,
    form: PathForm,
    sink: &mut dyn DiagnosticSink,
) {
    let path = match normalize(&entry.raw_path, form) {
        Ok(path) => path,
        Err(err) => {
            let reason = match err {
                PatchError::InvalidPath { reason, .. } => reason,
                other => other.to_string(),
            };
            sink.report(
                Diagnostic::invalid_resource_path(bundle.name(), &entry.raw_path, &reason)
                    .with_location(entry.physical_location),
            );
            return;
        }
    };

    let priority = bundle.priority();
    if let Some(existing) = merged.get(&path) {
        let existing_priority = existing.resource.priority;
        if existing_priority > priority {
            tracing::trace!(path = %path, bundle = bundle.name(), "shadowed by higher priority");
            return;
        }
        if existing_priority == priority {
            let diagnostic = if existing.bundle_index == bundle_index {
                Diagnostic::duplicate_in_bundle(
                    bundle.name(),
                    path.as_str(),
                    &existing.resource.physical_location,
                )
            } else {
                Diagnostic::override_conflict(
                    path.as_str(),
                    &existing.resource.bundle,
                    bundle.name(),
                    priority,
                )
            };
            sink.report(diagnostic.with_location(entry.physical_location));
            return;
        }
        tracing::trace!(
            path = %path,
            from = %existing.resource.bundle,
            to = bundle.name(),
            "override"
        );
    }

    let resource = Resource::new(path.clone(), entry.physical_location, bundle.name(), priority);
    merged.insert(
        path,
        Placement {
            resource,
            bundle_index,
        },
    );
}

impl<P> ResourceProvider for ResourceResolver<P> {
    fn select_all(&self) -> Result<Vec<ProvidedResource>> {
        Ok(self
            .resources()
            .map(|r| ProvidedResource {
                raw_path: r.path.to_string(),
                physical_location: r.physical_location.clone(),
            })
            .collect())
    }

    /// Probes ignore case even when the resolver's form keeps it
    fn try_get_by_path(&self, path: &ResourcePath) -> Result<Option<ProvidedResource>> {
        let found = self.try_resolve(path).or_else(|| {
            if self.form.contains(PathForm::CASE_FOLD) {
                return None;
            }
            let folded = fold_case(path.as_str());
            self.resources()
                .find(|r| fold_case(r.path.as_str()) == folded)
        });
        Ok(found.map(|r| ProvidedResource {
            raw_path: r.path.to_string(),
            physical_location: r.physical_location.clone(),
        }))
    }
}
