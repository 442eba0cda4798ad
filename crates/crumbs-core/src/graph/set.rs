//! The three relation graphs handed to one inference pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::RelationGraph;

/// The hierarchy relation a graph (or a panel square) describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Parent,
    Sibling,
    Child,
}

impl RelationKind {
    /// All kinds in panel order.
    pub const ALL: [Self; 3] = [Self::Parent, Self::Sibling, Self::Child];

    /// Stable lowercase name used in machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Sibling => "sibling",
            Self::Child => "child",
        }
    }

    /// Label shown when the panel displays relation types instead of field names.
    #[must_use]
    pub const fn type_label(self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Child => "Child",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the parent, sibling and child graphs.
///
/// The indexer owns construction and refresh; inference only borrows.
#[derive(Debug, Clone, Default)]
pub struct GraphSet {
    parents: RelationGraph,
    siblings: RelationGraph,
    children: RelationGraph,
}

impl GraphSet {
    #[must_use]
    pub const fn new(
        parents: RelationGraph,
        siblings: RelationGraph,
        children: RelationGraph,
    ) -> Self {
        Self {
            parents,
            siblings,
            children,
        }
    }

    /// Graph of "declares as parent" edges.
    #[must_use]
    pub const fn parents(&self) -> &RelationGraph {
        &self.parents
    }

    /// Graph of "declares as sibling" edges.
    #[must_use]
    pub const fn siblings(&self) -> &RelationGraph {
        &self.siblings
    }

    /// Graph of "declares as child" edges.
    #[must_use]
    pub const fn children(&self) -> &RelationGraph {
        &self.children
    }

    #[must_use]
    pub const fn get(&self, kind: RelationKind) -> &RelationGraph {
        match kind {
            RelationKind::Parent => &self.parents,
            RelationKind::Sibling => &self.siblings,
            RelationKind::Child => &self.children,
        }
    }

    pub fn get_mut(&mut self, kind: RelationKind) -> &mut RelationGraph {
        match kind {
            RelationKind::Parent => &mut self.parents,
            RelationKind::Sibling => &mut self.siblings,
            RelationKind::Child => &mut self.children,
        }
    }

    /// Total edges across all three graphs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        RelationKind::ALL
            .iter()
            .map(|&kind| self.get(kind).edge_count())
            .sum()
    }
}
