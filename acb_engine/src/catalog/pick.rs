//! Field extraction from heterogeneous pick events
//!
//! Accordion widgets emit several shapes when a field is picked. The shapes
//! are detected once here; nothing downstream re-inspects them.

use serde_json::Value as Json;

use crate::model::FieldRef;

/// Extract a field reference from a pick event payload.
///
/// Accepted shapes, in order: `{field: {id, label}}`, `{item: {id, label}}`,
/// bare `{id, label?}` (a missing label falls back to the id). Anything
/// else yields `None`.
pub fn field_from_pick(item: &Json) -> Option<FieldRef> {
    let obj = item.as_object()?;

    for wrapper in ["field", "item"] {
        if let Some(inner) = obj.get(wrapper).and_then(Json::as_object) {
            let id = inner.get("id").and_then(Json::as_str)?;
            let label = inner.get("label").and_then(Json::as_str).unwrap_or(id);
            return Some(FieldRef::new(id, label));
        }
    }

    if let Some(id) = obj.get("id").and_then(Json::as_str) {
        let label = obj.get("label").and_then(Json::as_str).unwrap_or(id);
        return Some(FieldRef::new(id, label));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_field_shape() {
        let picked = field_from_pick(&json!({"field": {"id": "Age", "label": "Age"}})).unwrap();
        assert_eq!(picked, FieldRef::new("Age", "Age"));
    }

    #[test]
    fn test_wrapped_item_shape() {
        let picked = field_from_pick(&json!({"item": {"id": "Name", "label": "Name"}})).unwrap();
        assert_eq!(picked.id, "Name");
    }

    #[test]
    fn test_bare_shape_label_falls_back_to_id() {
        let picked = field_from_pick(&json!({"id": "Phone"})).unwrap();
        assert_eq!(picked, FieldRef::new("Phone", "Phone"));
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        assert_eq!(field_from_pick(&json!(null)), None);
        assert_eq!(field_from_pick(&json!({"label": "orphan"})), None);
        assert_eq!(field_from_pick(&json!({"field": {"label": "no id"}})), None);
        assert_eq!(field_from_pick(&json!(42)), None);
    }
}
