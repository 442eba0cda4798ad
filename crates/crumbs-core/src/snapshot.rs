//! Serialized graph snapshots.
//!
//! An indexer that runs out of process hands its graphs over as JSON:
//!
//! ```json
//! {
//!   "parents":  [["A", "B"], ["C", "B"]],
//!   "siblings": [["A", "D"]],
//!   "children": [["B", "A"]],
//!   "unresolved": { "A": { "Missing": 1 } }
//! }
//! ```
//!
//! Each edge is a `[declarer, declared]` pair. Every key is optional.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::graph::{GraphSet, RelationGraph};
use crate::resolve::UnresolvedLinks;

/// Errors raised while decoding a snapshot document.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid graph snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl SnapshotError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Json(_) => ErrorCode::SnapshotParseError,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub parents: Vec<(String, String)>,
    #[serde(default)]
    pub siblings: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<(String, String)>,
    #[serde(default)]
    pub unresolved: UnresolvedLinks,
}

impl GraphSnapshot {
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if `content` is not a valid snapshot.
    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the three relation graphs from the edge lists.
    #[must_use]
    pub fn graph_set(&self) -> GraphSet {
        let build = |edges: &[(String, String)]| {
            RelationGraph::from_edges(edges.iter().map(|(a, b)| (a.as_str(), b.as_str())))
        };
        GraphSet::new(
            build(&self.parents),
            build(&self.siblings),
            build(&self.children),
        )
    }
}
