//! A [`ModuleHost`](crate::host::ModuleHost) that loads modules from a
//! [`Catalog`] into a [`ModuleStore`].

use depload_core::catalog::{Catalog, CatalogEntry};
use depload_core::config::VersionPolicy;
use depload_core::module::{ModuleId, ModuleStore};
use depload_core::reference::AssemblyReference;

use crate::host::{AssemblyResolver, ReferenceEnumerator};

/// Resolves references against a catalog, loading each entry at most once.
#[derive(Debug)]
pub struct CatalogResolver {
    catalog: Catalog,
    store: ModuleStore,
    policy: VersionPolicy,
    resolve_calls: usize,
}

impl CatalogResolver {
    pub fn new(catalog: Catalog, policy: VersionPolicy) -> Self {
        Self {
            catalog,
            store: ModuleStore::new(),
            policy,
            resolve_calls: 0,
        }
    }

    /// Load the module named by `display_name` as a run root.
    pub fn load_root(&mut self, display_name: &str) -> miette::Result<ModuleId> {
        let entry = self.catalog.find_root(display_name)?;
        Ok(load_entry(&mut self.store, entry))
    }

    pub fn store(&self) -> &ModuleStore {
        &self.store
    }

    /// Number of modules loaded so far, roots included.
    pub fn loaded(&self) -> usize {
        self.store.len()
    }

    /// Number of `resolve` calls served.
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls
    }
}

/// Pick the catalog entry a reference binds to under `policy`.
///
/// A reference without a version binds to the highest available version.
pub fn select<'a>(
    catalog: &'a Catalog,
    reference: &AssemblyReference,
    policy: VersionPolicy,
) -> Option<&'a CatalogEntry> {
    let candidates = catalog.candidates(&reference.name).into_iter();
    let Some(requested) = reference.version else {
        return candidates.max_by_key(|e| e.version);
    };

    match policy {
        VersionPolicy::Exact => candidates
            .filter(|e| e.version == Some(requested))
            .max_by_key(|e| e.version),
        VersionPolicy::Minimum => candidates
            .filter(|e| e.version.is_some_and(|v| v >= requested))
            .min_by_key(|e| e.version),
        VersionPolicy::NameOnly => candidates.max_by_key(|e| e.version),
    }
}

fn load_entry(store: &mut ModuleStore, entry: &CatalogEntry) -> ModuleId {
    let before = store.len();
    let id = store.insert(&entry.name, entry.version, entry.references.clone());
    if store.len() > before {
        tracing::debug!("Loaded {} as {id}", entry.as_reference());
    }
    id
}

impl ReferenceEnumerator for CatalogResolver {
    fn assembly_refs(&self, module: ModuleId) -> Vec<AssemblyReference> {
        match self.store.get(module) {
            Some(m) => m.references.clone(),
            None => {
                tracing::warn!("Module {module} is not loaded; it has no references");
                Vec::new()
            }
        }
    }

    fn describe(&self, module: ModuleId) -> String {
        self.store
            .get(module)
            .map(|m| m.to_string())
            .unwrap_or_else(|| module.to_string())
    }
}

impl AssemblyResolver for CatalogResolver {
    fn resolve(
        &mut self,
        reference: &AssemblyReference,
        requesting: ModuleId,
    ) -> miette::Result<Option<ModuleId>> {
        self.resolve_calls += 1;
        let Some(entry) = select(&self.catalog, reference, self.policy) else {
            tracing::debug!(
                "No catalog entry for {reference} (requested by {})",
                self.describe(requesting)
            );
            return Ok(None);
        };
        Ok(Some(load_entry(&mut self.store, entry)))
    }

    fn loaded_count(&self) -> Option<usize> {
        Some(self.store.len())
    }
}
