//! Value-control resolution
//!
//! Given a row's field type and chosen operator, computes the shape of the
//! value-entry control the row needs: whether it shows at all, whether it is
//! dual, its primitive kind, and which external source feeds a dropdown.

use serde::{Deserialize, Serialize};

use crate::catalog::fields::{
    self, dropdown_source, resolve_field_type, FieldType, SIMILAR_DROPDOWN_SOURCE,
};
use crate::catalog::operators::OperatorId;
use crate::model::SelectionRow;

/// Primitive kind of the value-entry widget.
///
/// Boolean fields do not resolve to a kind of their own; button-toggle
/// rendering is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Text,
    Number,
    Date,
    Dropdown,
    Button,
}

impl ControlKind {
    /// Field-type to control-kind mapping. Everything without a dedicated
    /// widget renders as text.
    pub fn for_field_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Date => ControlKind::Date,
            FieldType::Number => ControlKind::Number,
            FieldType::Dropdown => ControlKind::Dropdown,
            FieldType::Button => ControlKind::Button,
            _ => ControlKind::Text,
        }
    }
}

/// Resolved control shape for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueControl {
    /// Whether a value widget appears at all.
    pub show: bool,
    /// Two-part control (ranges and similar compounds).
    pub dual: bool,
    /// Similar compound: free value plus a fixed-category pick.
    pub is_similar: bool,
    pub kind: ControlKind,
    /// Source key feeding a dropdown control, when the kind is dropdown.
    pub dropdown_source: Option<String>,
    /// Fixed-category source for the second half of a similar compound.
    pub similar_source: Option<String>,
}

impl ValueControl {
    fn hidden() -> Self {
        Self {
            show: false,
            dual: false,
            is_similar: false,
            kind: ControlKind::Text,
            dropdown_source: None,
            similar_source: None,
        }
    }
}

/// Resolve the control shape for a row.
///
/// Order matters: the sentinel and no-value checks win before any shape is
/// derived from the field type.
pub fn resolve(row: &SelectionRow) -> ValueControl {
    let operator_id = row.operator_id();
    if operator_id.is_empty() {
        return ValueControl::hidden();
    }

    let operator = match OperatorId::from_str(operator_id) {
        Some(OperatorId::Select) | None => return ValueControl::hidden(),
        Some(op) => op,
    };

    if operator.is_no_value() {
        return ValueControl::hidden();
    }

    let field_type = resolve_field_type(&row.field.id);
    let kind = ControlKind::for_field_type(field_type);
    let dropdown = if kind == ControlKind::Dropdown {
        Some(dropdown_source(&row.field.id).to_string())
    } else {
        None
    };

    if operator.is_similar() {
        return ValueControl {
            show: true,
            dual: false,
            is_similar: true,
            kind,
            dropdown_source: dropdown,
            // Attached regardless of the field's own type.
            similar_source: Some(SIMILAR_DROPDOWN_SOURCE.to_string()),
        };
    }

    ValueControl {
        show: true,
        dual: operator.is_dual(),
        is_similar: false,
        kind,
        dropdown_source: dropdown,
        similar_source: None,
    }
}

/// Whether any row in the list currently needs a visible value column.
pub fn any_value_column_visible(rows: &[SelectionRow]) -> bool {
    rows.iter().any(|row| {
        resolve(row).show
            && row
                .operator
                .as_ref()
                .map(|op| !op.id.is_empty())
                .unwrap_or(false)
    })
}

/// Field-type name used by validation, resolved from the row's field id.
pub fn row_field_type(row: &SelectionRow) -> FieldType {
    fields::resolve_field_type(&row.field.id)
}
