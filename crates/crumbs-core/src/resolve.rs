//! Link resolution lookup.
//!
//! Whether a relation's target exists as a note is not stored on the
//! graphs. The host supplies a [`ResolutionLookup`] and every
//! [`LinkItem`](crate::LinkItem) reads it fresh during assembly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Answers "how many unresolved references does `owner` hold to `target`?".
pub trait ResolutionLookup {
    /// Number of unresolved references from `owner` to `target`.
    ///
    /// Unknown owners and targets report `0`.
    fn unresolved_count(&self, owner: &str, target: &str) -> u32;

    /// `true` when `owner`'s reference to `target` does not resolve to a note.
    fn is_unresolved(&self, owner: &str, target: &str) -> bool {
        self.unresolved_count(owner, target) > 0
    }
}

/// Owner → target → unresolved-reference count.
///
/// Mirrors the table a markdown indexer keeps of links whose target file
/// does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnresolvedLinks {
    links: HashMap<String, HashMap<String, u32>>,
}

impl UnresolvedLinks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` unresolved references from `owner` to `target`.
    pub fn insert(&mut self, owner: &str, target: &str, count: u32) {
        self.links
            .entry(owner.to_string())
            .or_default()
            .insert(target.to_string(), count);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.values().all(HashMap::is_empty)
    }
}

impl ResolutionLookup for UnresolvedLinks {
    fn unresolved_count(&self, owner: &str, target: &str) -> u32 {
        self.links
            .get(owner)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(0)
    }
}

/// Lookup for hosts without link metadata: everything resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllResolved;

impl ResolutionLookup for AllResolved {
    fn unresolved_count(&self, _owner: &str, _target: &str) -> u32 {
        0
    }
}
