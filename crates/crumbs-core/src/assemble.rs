//! Relationship assembly for a focal note.
//!
//! # Overview
//!
//! [`infer_relations`] runs the real and implied extractors for all three
//! relation kinds and classifies every resulting item against the
//! injected [`ResolutionLookup`]:
//!
//! ```text
//! parents.real     = successors(focal, parent graph)
//! parents.implied  = predecessors(focal, child graph)
//! siblings.real    = successors(focal, sibling graph)
//! siblings.implied = co-declarers of focal's parents, minus focal
//! children.real    = successors(focal, child graph)
//! children.implied = predecessors(focal, parent graph)
//! ```
//!
//! ## Real vs Implied Overlap
//!
//! A relation's real and implied lists are not deduplicated against each
//! other. If A declares B as parent and B declares A as child, B shows up
//! in both A's real and implied parents.
//!
//! ## Statelessness
//!
//! Nothing is cached between calls. Each pass reads the snapshot it is
//! handed and asks the lookup again, so a refreshed snapshot or lookup is
//! picked up by the next call.

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use petgraph::Direction;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::PanelConfig;
use crate::error::InferenceError;
use crate::graph::{GraphSet, RelationKind};
use crate::panel::{RelationPanel, ViewMode};
use crate::relations::{implied_children, implied_parents, implied_siblings, real_neighbors};
use crate::resolve::ResolutionLookup;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One relation edge as handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkItem {
    /// The related note.
    pub target: String,
    /// The focal note the relation was computed for.
    pub source: String,
    /// `false` when the lookup reports unresolved references to `target`.
    pub resolved: bool,
}

impl LinkItem {
    /// Classify `source → target` against `lookup`.
    #[must_use]
    pub fn classify(source: &str, target: &str, lookup: &dyn ResolutionLookup) -> Self {
        Self {
            target: target.to_string(),
            source: source.to_string(),
            resolved: !lookup.is_unresolved(source, target),
        }
    }
}

/// Real and implied items of one relation kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationSet {
    pub real: Vec<LinkItem>,
    pub implied: Vec<LinkItem>,
}

impl RelationSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.real.is_empty() && self.implied.is_empty()
    }

    /// Targets of the real items.
    pub fn real_targets(&self) -> impl Iterator<Item = &str> {
        self.real.iter().map(|i| i.target.as_str())
    }

    /// Targets of the implied items.
    pub fn implied_targets(&self) -> impl Iterator<Item = &str> {
        self.implied.iter().map(|i| i.target.as_str())
    }
}

/// Parents, siblings and children of one focal note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FocalRelations {
    pub focal: String,
    pub parents: RelationSet,
    pub siblings: RelationSet,
    pub children: RelationSet,
}

impl FocalRelations {
    #[must_use]
    pub const fn get(&self, kind: RelationKind) -> &RelationSet {
        match kind {
            RelationKind::Parent => &self.parents,
            RelationKind::Sibling => &self.siblings,
            RelationKind::Child => &self.children,
        }
    }

    /// `true` when all six lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        RelationKind::ALL.iter().all(|&k| self.get(k).is_empty())
    }
}

// ---------------------------------------------------------------------------
// InferenceContext
// ---------------------------------------------------------------------------

/// Everything one inference pass reads: the graph snapshot, the resolution
/// lookup and the panel labels.
#[derive(Clone, Copy)]
pub struct InferenceContext<'a> {
    graphs: &'a GraphSet,
    lookup: &'a dyn ResolutionLookup,
    config: &'a PanelConfig,
}

impl<'a> InferenceContext<'a> {
    #[must_use]
    pub fn builder() -> InferenceContextBuilder<'a> {
        InferenceContextBuilder::default()
    }

    /// Shorthand for [`infer_relations`].
    ///
    /// # Errors
    ///
    /// See [`infer_relations`].
    pub fn infer(&self, focal: &str) -> Result<FocalRelations, InferenceError> {
        infer_relations(self, focal)
    }

    /// Infer relations for `focal` and label them with this context's config.
    ///
    /// # Errors
    ///
    /// See [`infer_relations`].
    pub fn panel(&self, focal: &str, view: ViewMode) -> Result<RelationPanel, InferenceError> {
        let relations = infer_relations(self, focal)?;
        Ok(RelationPanel::build(relations, self.config, view))
    }
}

impl fmt::Debug for InferenceContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceContext")
            .field("graphs", self.graphs)
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Collects the collaborators of an [`InferenceContext`].
///
/// The graph set and the lookup are required; the config falls back to
/// [`PanelConfig::default`].
#[derive(Default)]
pub struct InferenceContextBuilder<'a> {
    graphs: Option<&'a GraphSet>,
    lookup: Option<&'a dyn ResolutionLookup>,
    config: Option<&'a PanelConfig>,
}

static DEFAULT_PANEL_CONFIG: std::sync::LazyLock<PanelConfig> =
    std::sync::LazyLock::new(PanelConfig::default);

impl<'a> InferenceContextBuilder<'a> {
    #[must_use]
    pub const fn graphs(mut self, graphs: &'a GraphSet) -> Self {
        self.graphs = Some(graphs);
        self
    }

    #[must_use]
    pub const fn lookup(mut self, lookup: &'a dyn ResolutionLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    #[must_use]
    pub const fn config(mut self, config: &'a PanelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// # Errors
    ///
    /// Returns [`InferenceError::MissingCollaborator`] if the graph set or
    /// the resolution lookup was not supplied.
    pub fn build(self) -> Result<InferenceContext<'a>, InferenceError> {
        let graphs = self
            .graphs
            .ok_or(InferenceError::MissingCollaborator("graph set"))?;
        let lookup = self
            .lookup
            .ok_or(InferenceError::MissingCollaborator("resolution lookup"))?;
        let config = self.config.unwrap_or(&*DEFAULT_PANEL_CONFIG);

        Ok(InferenceContext {
            graphs,
            lookup,
            config,
        })
    }
}

// ---------------------------------------------------------------------------
// Inference
// ---------------------------------------------------------------------------

/// Compute the real and implied parents, siblings and children of `focal`.
///
/// A note that appears in no graph gets six empty lists.
///
/// # Errors
///
/// Returns [`InferenceError::EmptyFocalNode`] if `focal` is empty.
#[instrument(skip(ctx))]
pub fn infer_relations(
    ctx: &InferenceContext<'_>,
    focal: &str,
) -> Result<FocalRelations, InferenceError> {
    if focal.is_empty() {
        return Err(InferenceError::EmptyFocalNode);
    }

    let graphs = ctx.graphs;
    let classify = |names: Vec<&str>| -> Vec<LinkItem> {
        names
            .into_iter()
            .map(|target| LinkItem::classify(focal, target, ctx.lookup))
            .collect()
    };

    let parents = RelationSet {
        real: classify(real_neighbors(graphs.parents(), focal, Direction::Outgoing)),
        implied: classify(implied_parents(graphs, focal)),
    };
    let siblings = RelationSet {
        real: classify(real_neighbors(graphs.siblings(), focal, Direction::Outgoing)),
        implied: classify(implied_siblings(graphs, focal)),
    };
    let children = RelationSet {
        real: classify(real_neighbors(graphs.children(), focal, Direction::Outgoing)),
        implied: classify(implied_children(graphs, focal)),
    };

    debug!(
        real_parents = parents.real.len(),
        implied_parents = parents.implied.len(),
        real_siblings = siblings.real.len(),
        implied_siblings = siblings.implied.len(),
        real_children = children.real.len(),
        implied_children = children.implied.len(),
        "inferred relations"
    );

    Ok(FocalRelations {
        focal: focal.to_string(),
        parents,
        siblings,
        children,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
