//! Panel configuration.
//!
//! The labels and layout preferences the host shows next to each relation.
//! None of these values influence inference.
//!
//! ```toml
//! [panel]
//! parent_field_name = "up"
//! sibling_field_name = "same"
//! child_field_name = "down"
//! show_name_or_type = true
//! default_view = "list"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::graph::RelationKind;
use crate::panel::ViewMode;

/// Errors raised while parsing configuration text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(_) => ErrorCode::ConfigParseError,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrumbsConfig {
    #[serde(default)]
    pub panel: PanelConfig,
}

impl CrumbsConfig {
    /// Parse a `config.toml` document. Missing tables and keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Frontmatter field that declares parents.
    #[serde(default = "default_parent_field")]
    pub parent_field_name: String,
    /// Frontmatter field that declares siblings.
    #[serde(default = "default_sibling_field")]
    pub sibling_field_name: String,
    /// Frontmatter field that declares children.
    #[serde(default = "default_child_field")]
    pub child_field_name: String,
    /// Label squares with the field names above instead of the relation type.
    #[serde(default)]
    pub show_name_or_type: bool,
    /// Layout used when the panel first opens.
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            parent_field_name: default_parent_field(),
            sibling_field_name: default_sibling_field(),
            child_field_name: default_child_field(),
            show_name_or_type: false,
            default_view: ViewMode::default(),
        }
    }
}

impl PanelConfig {
    /// Field name configured for `kind`.
    #[must_use]
    pub fn field_name(&self, kind: RelationKind) -> &str {
        match kind {
            RelationKind::Parent => &self.parent_field_name,
            RelationKind::Sibling => &self.sibling_field_name,
            RelationKind::Child => &self.child_field_name,
        }
    }

    /// Heading for `kind`'s square: the field name when `show_name_or_type`
    /// is set, otherwise the relation type.
    #[must_use]
    pub fn label(&self, kind: RelationKind) -> &str {
        if self.show_name_or_type {
            self.field_name(kind)
        } else {
            kind.type_label()
        }
    }
}

fn default_parent_field() -> String {
    "parent".to_string()
}

fn default_sibling_field() -> String {
    "sibling".to_string()
}

fn default_child_field() -> String {
    "child".to_string()
}
