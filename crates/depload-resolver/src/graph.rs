//! Graph of the modules reached in a loading run.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use depload_core::module::ModuleId;
use depload_core::reference::AssemblyReference;

/// A node in the loaded-module graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ModuleNode {
    pub id: ModuleId,
    pub name: String,
}

impl ModuleNode {
    /// Simple name without the version suffix.
    pub fn simple_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

impl fmt::Display for ModuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Loaded modules and the references connecting them, backed by petgraph.
pub struct DependencyGraph {
    graph: DiGraph<ModuleNode, AssemblyReference>,
    index: HashMap<ModuleId, NodeIndex>,
    pub root: Option<NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            root: None,
        }
    }

    /// Add or retrieve a node. If the module already exists, returns the existing index.
    pub fn add_node(&mut self, node: ModuleNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.id) {
            return idx;
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    pub fn set_root(&mut self, idx: NodeIndex) {
        self.root = Some(idx);
    }

    /// Add a reference edge from `from` to `to`; parallel edges are collapsed.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, reference: AssemblyReference) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, reference);
        }
    }

    pub fn find(&self, module: ModuleId) -> Option<NodeIndex> {
        self.index.get(&module).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &ModuleNode {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, in the order they were added.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &AssemblyReference)> {
        // petgraph iterates outgoing edges newest first
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
            .collect();
        deps.reverse();
        deps
    }

    /// Reverse dependencies (who references this node).
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &AssemblyReference)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight()))
            .collect();
        deps.reverse();
        deps
    }

    /// Print the dependency tree to a string.
    ///
    /// Modules that close a cycle are printed once more with a `(*)` marker
    /// and not expanded.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let Some(root) = self.root else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[root]));

        let mut on_path = HashSet::new();
        on_path.insert(root);

        let deps = self.dependencies_of(root);
        let count = deps.len();
        for (i, (idx, _)) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(&mut output, *idx, "", is_last, 1, max_depth, &mut on_path);
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        on_path: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];

        if on_path.contains(&idx) {
            output.push_str(&format!("{prefix}{connector}{node} (*)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        on_path.insert(idx);
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, (child, _)) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                on_path,
            );
        }
        on_path.remove(&idx);
    }

    /// Find the shortest path from root to a module.
    ///
    /// Accepts the full node label (`Name 1.0.0.0`) or just the simple name.
    /// Among paths of equal length, the one through earlier-declared
    /// references wins.
    pub fn find_path(&self, target_key: &str) -> Option<Vec<&ModuleNode>> {
        let root = self.root?;
        let target = self.resolve_key(target_key)?;

        let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            if current == target {
                let mut path = vec![current];
                let mut at = current;
                while let Some(&prev) = parent.get(&at) {
                    path.push(prev);
                    at = prev;
                }
                path.reverse();
                return Some(path.into_iter().map(|idx| &self.graph[idx]).collect());
            }
            for (child, _) in self.dependencies_of(current) {
                if seen.insert(child) {
                    parent.insert(child, current);
                    queue.push_back(child);
                }
            }
        }
        None
    }

    /// Resolve a user-provided key to a node index.
    ///
    /// Tries the full label first, then falls back to the simple name.
    fn resolve_key(&self, key: &str) -> Option<NodeIndex> {
        let key = key.trim();
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].name.eq_ignore_ascii_case(key))
            .or_else(|| {
                self.graph
                    .node_indices()
                    .find(|&idx| self.graph[idx].simple_name().eq_ignore_ascii_case(key))
            })
    }

    /// Build an inverted tree (who references whom) for a single module.
    pub fn print_inverted_tree(&self, target_key: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.resolve_key(target_key) else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut on_path = HashSet::new();
        on_path.insert(idx);

        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, _)) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(&mut output, *dep_idx, "", is_last, &mut on_path);
        }

        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        on_path: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];

        if on_path.contains(&idx) {
            output.push_str(&format!("{prefix}{connector}{node} (*)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        on_path.insert(idx);
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, (dep_idx, _)) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(output, *dep_idx, &child_prefix, is_last, on_path);
        }
        on_path.remove(&idx);
    }

    /// Number of nodes (excluding root).
    pub fn len(&self) -> usize {
        let total = self.graph.node_count();
        if self.root.is_some() {
            total.saturating_sub(1)
        } else {
            total
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
