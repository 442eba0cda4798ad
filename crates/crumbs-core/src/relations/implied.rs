//! Relationships implied by the symmetry of declared edges.
//!
//! # Rules
//!
//! | relation of N    | derived from                                          |
//! |------------------|-------------------------------------------------------|
//! | implied parents  | predecessors of N in the child graph                  |
//! | implied children | predecessors of N in the parent graph                 |
//! | implied siblings | predecessors of every declared parent P of N, minus N |
//!
//! Implied siblings are merged across parents: two notes sharing several
//! parents are reported once, at the position of their first discovery.

use std::collections::HashSet;

use petgraph::Direction;

use crate::graph::GraphSet;

/// Notes that declare `focal` as their child.
#[must_use]
pub fn implied_parents<'g>(graphs: &'g GraphSet, focal: &str) -> Vec<&'g str> {
    graphs.children().neighbors(focal, Direction::Incoming)
}

/// Notes that declare `focal` as their parent.
#[must_use]
pub fn implied_children<'g>(graphs: &'g GraphSet, focal: &str) -> Vec<&'g str> {
    graphs.parents().neighbors(focal, Direction::Incoming)
}

/// Notes that declare at least one of `focal`'s declared parents as their own.
///
/// `focal` is always excluded: it trivially shares every parent with itself.
/// A note with no declared parents has no implied siblings.
#[must_use]
pub fn implied_siblings<'g>(graphs: &'g GraphSet, focal: &str) -> Vec<&'g str> {
    let parent_graph = graphs.parents();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut siblings = Vec::new();

    for parent in parent_graph.successors(focal) {
        for candidate in parent_graph.predecessors(parent) {
            if candidate == focal {
                continue;
            }
            if seen.insert(candidate) {
                siblings.push(candidate);
            }
        }
    }

    siblings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{RelationGraph, RelationKind};

    fn parents_only(edges: &[(&str, &str)]) -> GraphSet {
        let mut set = GraphSet::default();
        let graph = set.get_mut(RelationKind::Parent);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        set
    }

    #[test]
    fn shared_parent_yields_mutual_siblings() {
        let set = parents_only(&[("A", "B"), ("C", "B")]);
        assert_eq!(implied_siblings(&set, "A"), vec!["C"]);
        assert_eq!(implied_siblings(&set, "C"), vec!["A"]);
        assert_eq!(implied_children(&set, "B"), vec!["A", "C"]);
    }

    #[test]
    fn only_child_has_no_implied_siblings() {
        let set = parents_only(&[("A", "B")]);
        assert!(implied_siblings(&set, "A").is_empty());
    }

    #[test]
    fn no_declared_parents_means_no_siblings() {
        let set = parents_only(&[("C", "B")]);
        assert!(implied_siblings(&set, "A").is_empty());
        assert!(implied_siblings(&set, "B").is_empty());
    }

    #[test]
    fn siblings_through_several_parents_are_merged() {
        let set = parents_only(&[("N", "P1"), ("N", "P2"), ("M", "P1"), ("M", "P2"), ("O", "P2")]);
        assert_eq!(implied_siblings(&set, "N"), vec!["M", "O"]);
    }

    #[test]
    fn self_declared_parent_does_not_make_focal_its_own_sibling() {
        let set = parents_only(&[("A", "A"), ("C", "A")]);
        assert_eq!(implied_siblings(&set, "A"), vec!["C"]);
    }

    #[test]
    fn implied_parents_come_from_child_declarations() {
        let set = GraphSet::new(
            RelationGraph::new(),
            RelationGraph::new(),
            RelationGraph::from_edges([("B", "A"), ("D", "A")]),
        );
        assert_eq!(implied_parents(&set, "A"), vec!["B", "D"]);
        assert!(implied_parents(&set, "B").is_empty());
    }
}
