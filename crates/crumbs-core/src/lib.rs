#![forbid(unsafe_code)]
//! crumbs-core library.
//!
//! Infers the hierarchical neighbourhood of a focal note from three typed
//! relation graphs (parent, sibling, child) and splits every relation into
//! the edges the note declares itself (*real*) and the edges that follow
//! from what other notes declare (*implied*).
//!
//! ## Pipeline
//!
//! ```text
//! GraphSet (parent / sibling / child snapshots)
//!        ↓  relations::real + relations::implied
//! node names per relation, per side
//!        ↓  resolve::ResolutionLookup
//! LinkItem { target, source, resolved }
//!        ↓  assemble::infer_relations()
//! FocalRelations { parents, siblings, children }
//!        ↓  panel::RelationPanel::build()
//! three labelled squares + selected ViewMode
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed errors via `thiserror` ([`InferenceError`], [`ConfigError`],
//!   [`SnapshotError`]).
//! - **Logging**: use `tracing` macros (`debug!`, `trace!`); the library never
//!   installs a subscriber.

pub mod assemble;
pub mod config;
pub mod error;
pub mod graph;
pub mod panel;
pub mod relations;
pub mod resolve;
pub mod snapshot;

pub use assemble::{
    FocalRelations, InferenceContext, InferenceContextBuilder, LinkItem, RelationSet,
    infer_relations,
};
pub use config::{ConfigError, CrumbsConfig, PanelConfig};
pub use error::{ErrorCode, InferenceError};
pub use graph::{GraphSet, RelationGraph, RelationKind};
pub use panel::{RelationPanel, Square, ViewMode};
pub use resolve::{AllResolved, ResolutionLookup, UnresolvedLinks};
pub use snapshot::{GraphSnapshot, SnapshotError};
