//! Direct neighbours read off a single relation graph.

use petgraph::Direction;

use crate::graph::RelationGraph;

/// Direct neighbours of `focal` in `direction`.
///
/// `Outgoing` gives what `focal` declares; `Incoming` gives the notes that
/// declare `focal`. A note missing from the graph yields an empty list.
#[must_use]
pub fn real_neighbors<'g>(
    graph: &'g RelationGraph,
    focal: &str,
    direction: Direction,
) -> Vec<&'g str> {
    graph.neighbors(focal, direction)
}
