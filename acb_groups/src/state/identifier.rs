//! Saved-field identity
//!
//! Selection must survive re-normalization, so a field is identified by its
//! unique id when it has one, by its row id next, and by content (field,
//! operator, value) otherwise.

use serde::{Deserialize, Serialize};

use acb_engine::wire::flatten_value;

use crate::normalize::SavedField;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldIdentifier {
    pub unique_id: String,
    pub row_id: String,
    pub field_id: String,
    pub operator_id: String,
    /// Flattened value, matching the wire encoding.
    pub value: serde_json::Value,
}

impl FieldIdentifier {
    pub fn for_field(field: &SavedField) -> Self {
        Self {
            unique_id: field.unique_id.clone(),
            row_id: field.row.row_id.clone(),
            field_id: field.row.field.id.clone(),
            operator_id: field.row.operator_id().to_string(),
            value: flatten_value(&field.row.value),
        }
    }

    /// Unique id wins when both sides carry one, then the row id; content
    /// comparison is the fallback for fields saved before ids existed.
    pub fn matches(&self, field: &SavedField) -> bool {
        if !self.unique_id.is_empty() && !field.unique_id.is_empty() {
            return self.unique_id == field.unique_id;
        }
        if !self.row_id.is_empty() && !field.row.row_id.is_empty() {
            return self.row_id == field.row.row_id;
        }
        self.field_id == field.row.field.id
            && self.operator_id == field.row.operator_id()
            && self.value == flatten_value(&field.row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acb_engine::model::{FieldRef, OperatorRef, SelectionRow};

    fn field(unique_id: &str, field_id: &str, value: &str) -> SavedField {
        let mut row = SelectionRow::default();
        row.field = FieldRef::new(field_id, field_id);
        row.operator = Some(OperatorRef::new("equals", "Equals"));
        row.value = value.into();
        SavedField {
            unique_id: unique_id.to_string(),
            row,
        }
    }

    #[test]
    fn test_unique_id_match_wins() {
        let a = field("field_g1_0", "Age", "25");
        let ident = FieldIdentifier::for_field(&a);

        let same_id_other_content = field("field_g1_0", "Name", "x");
        assert!(ident.matches(&same_id_other_content));

        let other_id_same_content = field("field_g1_1", "Age", "25");
        assert!(!ident.matches(&other_id_same_content));
    }

    #[test]
    fn test_row_id_tier_between_unique_id_and_content() {
        let mut a = field("", "Age", "25");
        a.row.row_id = "r42".to_string();
        let ident = FieldIdentifier::for_field(&a);

        let mut same_row_id_other_content = field("", "Name", "x");
        same_row_id_other_content.row.row_id = "r42".to_string();
        assert!(ident.matches(&same_row_id_other_content));

        let mut other_row_id_same_content = field("", "Age", "25");
        other_row_id_same_content.row.row_id = "r7".to_string();
        assert!(!ident.matches(&other_row_id_same_content));
    }

    #[test]
    fn test_content_fallback_without_ids() {
        let a = field("", "Age", "25");
        let ident = FieldIdentifier::for_field(&a);

        assert!(ident.matches(&field("", "Age", "25")));
        assert!(!ident.matches(&field("", "Age", "30")));
        assert!(!ident.matches(&field("", "Name", "25")));
    }
}
