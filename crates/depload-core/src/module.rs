//! The arena of loaded modules.
//!
//! Modules are addressed by [`ModuleId`] rather than by pointer, so cyclic
//! reference graphs never become cyclic ownership.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::reference::{AssemblyReference, AssemblyVersion};

/// Stable identity of a module inside a [`ModuleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModuleId(u32);

impl ModuleId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One loaded binary unit.
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub id: ModuleId,
    pub name: String,
    pub version: Option<AssemblyVersion>,
    /// Outgoing references in declaration order.
    pub references: Vec<AssemblyReference>,
}

impl fmt::Display for LoadedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{} {v}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Owns every module loaded into the working set.
#[derive(Debug, Default)]
pub struct ModuleStore {
    modules: Vec<LoadedModule>,
    /// Lookup from lowercase name and version to id.
    index: HashMap<(String, Option<AssemblyVersion>), ModuleId>,
}

impl ModuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str, version: Option<AssemblyVersion>) -> (String, Option<AssemblyVersion>) {
        (name.to_ascii_lowercase(), version)
    }

    /// Insert a module, or return the existing id if the same name and
    /// version is already loaded.
    pub fn insert(
        &mut self,
        name: &str,
        version: Option<AssemblyVersion>,
        references: Vec<AssemblyReference>,
    ) -> ModuleId {
        let key = Self::key(name, version);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(LoadedModule {
            id,
            name: name.to_string(),
            version,
            references,
        });
        self.index.insert(key, id);
        id
    }

    pub fn find(&self, name: &str, version: Option<AssemblyVersion>) -> Option<ModuleId> {
        self.index.get(&Self::key(name, version)).copied()
    }

    pub fn get(&self, id: ModuleId) -> Option<&LoadedModule> {
        self.modules.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent_per_name_and_version() {
        let mut store = ModuleStore::new();
        let v = AssemblyVersion::new(1, 0, 0, 0);
        let a = store.insert("Lib", Some(v), Vec::new());
        let b = store.insert("lib", Some(v), Vec::new());
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_versions_are_distinct_modules() {
        let mut store = ModuleStore::new();
        let a = store.insert("Lib", Some(AssemblyVersion::new(1, 0, 0, 0)), Vec::new());
        let b = store.insert("Lib", Some(AssemblyVersion::new(2, 0, 0, 0)), Vec::new());
        assert_ne!(a, b);
        assert_eq!(store.get(b).unwrap().to_string(), "Lib 2.0.0.0");
    }

    #[test]
    fn version_is_not_folded_into_the_name() {
        let mut store = ModuleStore::new();
        let v = AssemblyVersion::new(1, 0, 0, 0);
        let odd = store.insert("Lib@1.0.0.0", None, Vec::new());
        let lib = store.insert("Lib", Some(v), Vec::new());
        assert_ne!(odd, lib);
        assert_eq!(store.find("Lib", Some(v)), Some(lib));
        assert_eq!(store.find("lib@1.0.0.0", None), Some(odd));
    }
}
