//! A single directed relation graph keyed by note name.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

// ---------------------------------------------------------------------------
// RelationGraph
// ---------------------------------------------------------------------------

/// A directed graph of declared relationships for one [`RelationKind`].
///
/// Nodes are note base names. Edges have set semantics: inserting the same
/// `(from, to)` pair twice keeps a single edge. Self-edges are stored as-is;
/// consumers filter them where they make no sense.
///
/// [`RelationKind`]: crate::graph::RelationKind
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    /// Directed graph: nodes = note names, edges = declarations.
    graph: DiGraph<String, ()>,
    /// Mapping from note name to petgraph `NodeIndex`.
    node_map: HashMap<String, NodeIndex>,
}

impl RelationGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(declarer, declared)` pairs.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from.as_ref(), to.as_ref());
        }
        trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built relation graph"
        );
        graph
    }

    /// Insert a node if it is not present yet and return its index.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Insert the edge `from → to`, adding missing endpoints.
    ///
    /// Returns `false` when the edge was already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);

        // petgraph allows parallel edges; this graph does not.
        if self.graph.contains_edge(from_idx, to_idx) {
            return false;
        }
        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    /// Return `true` if `name` has been indexed as a node.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Return `true` if the edge `from → to` is present.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Notes that `name` points at (what it declares).
    #[must_use]
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Notes that point at `name` (what others declare about it).
    #[must_use]
    pub fn predecessors(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
    }

    /// Direct neighbours of `name` in `direction`, in edge insertion order.
    ///
    /// Unknown names have no neighbours.
    #[must_use]
    pub fn neighbors(&self, name: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };

        // petgraph walks its adjacency list newest-first.
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].as_str())
            .collect();
        out.reverse();
        out
    }

    /// Iterate every edge as `(from, to)` names.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
            )
        })
    }

    /// BLAKE3 hash of the sorted edge list, formatted as `blake3:<hex>`.
    ///
    /// Equal edge sets hash equally regardless of insertion order. Nodes
    /// without edges do not contribute.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut edges: Vec<(&str, &str)> = self.edges().collect();
        edges.sort_unstable();

        let mut hasher = blake3::Hasher::new();
        for (from, to) in edges {
            hasher.update(from.as_bytes());
            hasher.update(b"\x00");
            hasher.update(to.as_bytes());
            hasher.update(b"\x00");
        }
        format!("blake3:{}", hasher.finalize())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
