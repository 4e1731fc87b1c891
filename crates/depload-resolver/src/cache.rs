//! Per-run bookkeeping of traversed modules.

use std::collections::HashSet;

use depload_core::module::ModuleId;

/// Tracks which modules have been visited during one resolution run to
/// prevent infinite loops in circular reference chains.
///
/// Iteration yields modules in first-visit order.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    seen: HashSet<ModuleId>,
    order: Vec<ModuleId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module as visited. Returns `false` if already visited.
    pub fn visit(&mut self, module: ModuleId) -> bool {
        if !self.seen.insert(module) {
            return false;
        }
        self.order.push(module);
        true
    }

    pub fn contains(&self, module: ModuleId) -> bool {
        self.seen.contains(&module)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[ModuleId] {
        &self.order
    }

    pub fn to_set(&self) -> HashSet<ModuleId> {
        self.seen.clone()
    }
}
