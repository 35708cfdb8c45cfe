//! Outbound search-request format
//!
//! Converts the editable row list into the flattened shape the search
//! backend accepts. Conversion is pure: rows are read, never mutated, so
//! converting twice yields byte-identical requests.

use serde::{Deserialize, Serialize};

use crate::model::{DropdownItem, FieldRef, OperatorRef, ParentRef, SelectionRow, TitleRef, Value};

/// One criterion in the outbound request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriterion {
    pub row_id: String,
    pub parent: ParentRef,
    pub parent_selected: Vec<DropdownItem>,
    pub field: FieldRef,
    pub operator: OperatorRef,
    pub value: serde_json::Value,
}

/// The full outbound request: a title plus the flattened criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub title: TitleRef,
    pub fields: Vec<SearchCriterion>,
}

/// Flatten a row value for the wire.
///
/// Dropdown items collapse to their id; dual and list values collapse each
/// element the same way, joined with `-` (so a between range of 20 and 30
/// travels as `"20-30"`). Scalars pass through in their native JSON type,
/// null stays null.
pub fn flatten_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::json!(*n),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Item(item) => serde_json::Value::String(item.id.clone()),
        Value::List(values) => {
            let parts: Vec<String> = values.iter().map(flatten_part).collect();
            serde_json::Value::String(parts.join("-"))
        }
    }
}

fn flatten_part(value: &Value) -> String {
    match value {
        Value::Item(item) => item.id.clone(),
        other => other.scalar_string().unwrap_or_default(),
    }
}

/// Convert the row list to wire criteria. A missing operator travels as an
/// empty reference rather than being dropped; the backend rejects it with
/// its own messaging.
pub fn convert_to_wire_format(rows: &[SelectionRow]) -> Vec<SearchCriterion> {
    rows.iter()
        .map(|row| SearchCriterion {
            row_id: row.row_id.clone(),
            parent: row.parent.clone(),
            parent_selected: match &row.parent_selected {
                crate::model::ParentSelection::None => Vec::new(),
                crate::model::ParentSelection::One(item) => vec![item.clone()],
                crate::model::ParentSelection::Many(items) => items.clone(),
            },
            field: row.field.clone(),
            operator: row.operator.clone().unwrap_or_default(),
            value: flatten_value(&row.value),
        })
        .collect()
}

/// Build the full request from a title and the row list.
pub fn build_search_request(title: TitleRef, rows: &[SelectionRow]) -> SearchRequest {
    SearchRequest {
        title,
        fields: convert_to_wire_format(rows),
    }
}
