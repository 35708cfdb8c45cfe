//! Identifier/label reference pairs
//!
//! Identity is always the `id`; labels are locale-dependent display text and
//! must be re-derivable from the id alone after a locale switch.

use serde::{Deserialize, Serialize};

/// A catalog field reference: stable id plus display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl FieldRef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An operator reference. The id is drawn from the closed
/// [`OperatorId`](crate::catalog::operators::OperatorId) enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRef {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl OperatorRef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Identifies the field group (archival type) a field came from.
/// An empty id means the field came from a root-level catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl ParentRef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Root-catalog fields carry an empty parent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// One entry of an external dropdown data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl DropdownItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Title of a saved group or field group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRef {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl TitleRef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
