use std::collections::HashSet;

use crumbs_core::relations::{implied_children, implied_parents, implied_siblings};
use crumbs_core::{AllResolved, InferenceContext};
use proptest::prelude::*;

use generators::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn focal_is_never_its_own_implied_sibling(set in arb_graph_set(), focal in arb_note()) {
        let siblings = implied_siblings(&set, &focal);
        prop_assert!(!siblings.contains(&focal.as_str()));
    }

    #[test]
    fn implied_siblings_have_no_duplicates(set in arb_graph_set(), focal in arb_note()) {
        let siblings = implied_siblings(&set, &focal);
        let unique: HashSet<&str> = siblings.iter().copied().collect();
        prop_assert_eq!(unique.len(), siblings.len());
    }

    #[test]
    fn implied_siblings_are_symmetric(set in arb_graph_set(), n in arb_note(), m in arb_note()) {
        if implied_siblings(&set, &n).contains(&m.as_str()) {
            prop_assert!(implied_siblings(&set, &m).contains(&n.as_str()));
        }
    }

    #[test]
    fn declared_child_implies_parent(set in arb_graph_set()) {
        for (from, to) in set.children().edges() {
            prop_assert!(implied_parents(&set, to).contains(&from));
        }
    }

    #[test]
    fn declared_parent_implies_child(set in arb_graph_set()) {
        for (from, to) in set.parents().edges() {
            prop_assert!(implied_children(&set, to).contains(&from));
        }
    }

    #[test]
    fn untouched_note_has_no_relations(set in arb_graph_set()) {
        let ctx = InferenceContext::builder()
            .graphs(&set)
            .lookup(&AllResolved)
            .build()
            .expect("context");
        // Outside the generator alphabet.
        let rel = ctx.infer("Z").expect("infer");
        prop_assert!(rel.is_empty());
    }
}
