//! Real and implied neighbourhoods of a focal note.
//!
//! - [`real`] reads what the focal note declares (or what is declared about
//!   it) straight off one graph.
//! - [`implied`] derives the relations that follow from other notes'
//!   declarations: a note that names the focal note as its parent is an
//!   implied child, and notes that share a declared parent are implied
//!   siblings.
//!
//! Both return plain note names; [`crate::assemble`] attaches resolution
//! state.

pub mod implied;
pub mod real;

pub use implied::{implied_children, implied_parents, implied_siblings};
pub use real::real_neighbors;
