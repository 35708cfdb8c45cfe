//! The selection row: one search condition
//!
//! Field names serialize in camelCase so snapshots written by earlier
//! front-end builds load unchanged.

use serde::{Deserialize, Serialize};

use super::refs::{DropdownItem, FieldRef, OperatorRef, ParentRef};
use super::value::Value;

/// Multi-valued parent representation. `None` deserializes from JSON null
/// and from a missing key; a bare object and an array are both accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentSelection {
    #[default]
    None,
    One(DropdownItem),
    Many(Vec<DropdownItem>),
}

impl ParentSelection {
    /// True when no parent has been chosen through the selector.
    pub fn is_empty(&self) -> bool {
        match self {
            ParentSelection::None => true,
            ParentSelection::One(item) => item.id.is_empty(),
            ParentSelection::Many(items) => items.is_empty(),
        }
    }

    /// Ids of the chosen parents, for dropdown binding.
    pub fn ids(&self) -> Vec<String> {
        match self {
            ParentSelection::None => Vec::new(),
            ParentSelection::One(item) => {
                if item.id.is_empty() {
                    Vec::new()
                } else {
                    vec![item.id.clone()]
                }
            }
            ParentSelection::Many(items) => items
                .iter()
                .filter(|item| !item.id.is_empty())
                .map(|item| item.id.clone())
                .collect(),
        }
    }
}

/// Touched flag for the value cell: dual controls track each half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Touched {
    One(bool),
    Each(Vec<bool>),
}

impl Default for Touched {
    fn default() -> Self {
        Touched::One(false)
    }
}

impl Touched {
    pub fn any(&self) -> bool {
        match self {
            Touched::One(b) => *b,
            Touched::Each(flags) => flags.iter().any(|b| *b),
        }
    }
}

/// One row of search criteria.
///
/// Exactly one of `parent.id` (non-empty) or `parent_selected` (non-empty)
/// is the authoritative parent at any time, governed by `is_parent_array`.
/// Touched flags gate validation-error display only; they never gate
/// persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionRow {
    /// Stable id, assigned once. Empty for rows never persisted server-side.
    pub row_id: String,
    pub parent: ParentRef,
    pub parent_selected: ParentSelection,
    pub field: FieldRef,
    pub operator: Option<OperatorRef>,
    pub value: Value,
    pub is_parent_array: bool,
    pub parent_touched: bool,
    pub operator_touched: bool,
    pub value_touched: Touched,
    /// Locale tag stamped when the row was created or last restored.
    pub current_language: String,
}

impl SelectionRow {
    /// A fresh row for a just-picked catalog field: empty value, untouched
    /// flags, operator left to the caller to resolve.
    pub fn for_field(
        field: FieldRef,
        parent: ParentRef,
        locale: &str,
        is_parent_array: bool,
    ) -> Self {
        Self {
            row_id: String::new(),
            parent,
            parent_selected: ParentSelection::Many(Vec::new()),
            field,
            operator: None,
            value: Value::Null,
            is_parent_array,
            parent_touched: false,
            operator_touched: false,
            value_touched: Touched::One(false),
            current_language: locale.to_string(),
        }
    }

    /// Id of the chosen operator, empty string when none is set.
    pub fn operator_id(&self) -> &str {
        self.operator.as_ref().map(|op| op.id.as_str()).unwrap_or("")
    }

    /// Mark every touched flag so hidden validation errors become visible.
    pub fn touch_all(&mut self) {
        self.parent_touched = true;
        self.operator_touched = true;
        self.value_touched = match &self.value_touched {
            Touched::Each(flags) => Touched::Each(vec![true; flags.len().max(2)]),
            Touched::One(_) => Touched::One(true),
        };
    }
}
