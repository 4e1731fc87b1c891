//! The result of one transitive loading run.

use std::collections::HashSet;

use depload_core::module::ModuleId;

use crate::cache::VisitedSet;
use crate::graph::{DependencyGraph, ModuleNode};
use crate::host::ReferenceEnumerator;
use crate::outcome::{ReferenceOutcome, ResolvedDependency};

/// Modules reached from a root and the decision taken for every reference
/// examined on the way.
#[derive(Debug, Clone)]
pub struct LoadReport {
    root: ModuleId,
    visited: VisitedSet,
    /// Reference decisions in traversal order.
    pub outcomes: Vec<ReferenceOutcome>,
    newly_loaded: usize,
}

impl LoadReport {
    pub fn new(
        root: ModuleId,
        visited: VisitedSet,
        outcomes: Vec<ReferenceOutcome>,
        newly_loaded: usize,
    ) -> Self {
        Self {
            root,
            visited,
            outcomes,
            newly_loaded,
        }
    }

    pub fn root(&self) -> ModuleId {
        self.root
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Visited modules in first-visit order, root first.
    pub fn modules(&self) -> &[ModuleId] {
        self.visited.as_slice()
    }

    pub fn module_set(&self) -> HashSet<ModuleId> {
        self.visited.to_set()
    }

    pub fn contains(&self, module: ModuleId) -> bool {
        self.visited.contains(module)
    }

    /// Number of visited modules, root included.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Always false: the root is part of every report.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Modules this run caused the host to load.
    pub fn newly_loaded(&self) -> usize {
        self.newly_loaded
    }

    pub fn framework_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_framework())
            .count()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &ReferenceOutcome> {
        self.outcomes.iter().filter(|o| o.outcome.is_unresolved())
    }

    /// Build a graph with one edge per resolved reference.
    pub fn graph<H: ReferenceEnumerator>(&self, host: &H) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for module in self.visited.iter() {
            graph.add_node(ModuleNode {
                id: module,
                name: host.describe(module),
            });
        }
        if let Some(root) = graph.find(self.root) {
            graph.set_root(root);
        }

        for outcome in &self.outcomes {
            let ResolvedDependency::Resolved { module } = outcome.outcome else {
                continue;
            };
            if let (Some(from), Some(to)) = (graph.find(outcome.requesting), graph.find(module)) {
                graph.add_edge(from, to, outcome.reference.clone());
            }
        }
        graph
    }
}
