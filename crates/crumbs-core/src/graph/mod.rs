//! Typed relation graphs.
//!
//! # Overview
//!
//! Three directed graphs describe a vault's hierarchy, one per
//! [`RelationKind`]. An edge `A → B` in the graph of kind `k` means "A
//! declares B as its `k`":
//!
//! ```text
//! parent graph   A → B   A says "my parent is B"
//! sibling graph  A → C   A says "my sibling is C"
//! child graph    B → A   B says "my child is A"
//! ```
//!
//! The graphs are built and refreshed by whoever indexes the notes. The
//! inference passes only read them, so a [`GraphSet`] is a plain snapshot.
//!
//! ## Missing Nodes
//!
//! Every query accepts names that were never indexed and answers with an
//! empty neighbour list. A snapshot refreshed mid-pass can therefore only
//! shrink results, never fail them.

pub mod relation;
pub mod set;

pub use petgraph::Direction;
pub use relation::RelationGraph;
pub use set::{GraphSet, RelationKind};
