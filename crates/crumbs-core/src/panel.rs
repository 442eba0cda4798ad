//! Presentation-neutral panel model.
//!
//! A panel is three labelled squares (parents, siblings, children), each
//! holding the real and implied items of one relation, plus the layout the
//! host should draw them in. The layout never changes what the squares
//! contain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assemble::{FocalRelations, LinkItem, RelationSet};
use crate::config::PanelConfig;
use crate::graph::RelationKind;

/// How the host lays out the three squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Side-by-side grid.
    #[default]
    Matrix,
    /// One list per relation, stacked.
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }

    /// The other layout.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Matrix => Self::List,
            Self::List => Self::Matrix,
        }
    }

    /// Caption for a toggle control: names the layout it switches *to*.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Matrix => "List",
            Self::List => "Matrix",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One relation's cell in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Square {
    pub kind: RelationKind,
    pub label: String,
    pub real: Vec<LinkItem>,
    pub implied: Vec<LinkItem>,
}

impl Square {
    fn new(kind: RelationKind, label: &str, set: RelationSet) -> Self {
        Self {
            kind,
            label: label.to_string(),
            real: set.real,
            implied: set.implied,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.real.is_empty() && self.implied.is_empty()
    }
}

/// Everything a host needs to draw the relationship panel for one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationPanel {
    pub focal: String,
    pub view: ViewMode,
    /// Parent, sibling and child squares, in that order.
    pub squares: Vec<Square>,
}

impl RelationPanel {
    /// Label `relations` with `config` and pair them with `view`.
    #[must_use]
    pub fn build(relations: FocalRelations, config: &PanelConfig, view: ViewMode) -> Self {
        let FocalRelations {
            focal,
            parents,
            siblings,
            children,
        } = relations;

        let squares = vec![
            Square::new(RelationKind::Parent, config.label(RelationKind::Parent), parents),
            Square::new(RelationKind::Sibling, config.label(RelationKind::Sibling), siblings),
            Square::new(RelationKind::Child, config.label(RelationKind::Child), children),
        ];

        Self {
            focal,
            view,
            squares,
        }
    }

    /// Switch layout in place; square contents are untouched.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggle();
    }

    #[must_use]
    pub fn square(&self, kind: RelationKind) -> Option<&Square> {
        self.squares.iter().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Square::is_empty)
    }
}
