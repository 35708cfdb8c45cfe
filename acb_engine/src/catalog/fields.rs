//! Field typing tables
//!
//! Maps opaque archive field ids to semantic field types and, for dropdown
//! fields, to the external data source that feeds the control.

use serde::{Deserialize, Serialize};

/// Semantic type of an archive field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Bool,
    Dropdown,
    Time,
    Button,
    Unknown,
}

impl FieldType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Bool => "bool",
            Self::Dropdown => "dropdown",
            Self::Time => "time",
            Self::Button => "button",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "date" => Some(Self::Date),
            "bool" => Some(Self::Bool),
            "dropdown" => Some(Self::Dropdown),
            "time" => Some(Self::Time),
            "button" => Some(Self::Button),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields carrying numeric values.
const NUMERIC_FIELDS: &[&str] = &[
    "Age", "Phone", "-21", "-22", "-23", "-24", "-25", "26", "27", "28", "29", "30",
];

/// Free-text fields.
const STRING_FIELDS: &[&str] = &[
    "Name", "Image", "-11", "-12", "-13", "-14", "15", "16", "17", "18", "19", "20",
];

/// Date-valued fields.
const DATE_FIELDS: &[&str] = &[
    "Document", "DT-EN-1", "-42", "DT-EN-3", "DT-EN-4", "45", "DT-EN-6", "47", "DT-EN-8", "49",
    "DT-EN-10",
];

/// Fields whose values come from an external dropdown source.
const DROPDOWN_FIELDS: &[&str] = &[
    "PinCode", "-31", "-32", "-33", "-34", "-35", "36", "37", "38", "39", "40",
];

/// Fields rendered as toggle buttons.
const BUTTON_FIELDS: &[&str] = &[
    "-1", "-2", "-3", "-4", "-5", "-6", "-7", "-8", "-9", "-10",
];

/// Resolve a field id to its semantic type. Unknown ids default to text.
pub fn resolve_field_type(field_id: &str) -> FieldType {
    if NUMERIC_FIELDS.contains(&field_id) {
        FieldType::Number
    } else if STRING_FIELDS.contains(&field_id) {
        FieldType::Text
    } else if DATE_FIELDS.contains(&field_id) {
        FieldType::Date
    } else if DROPDOWN_FIELDS.contains(&field_id) {
        FieldType::Dropdown
    } else if BUTTON_FIELDS.contains(&field_id) {
        FieldType::Button
    } else {
        FieldType::Text
    }
}

/// Default dropdown data source for fields without an explicit mapping.
pub const DEFAULT_DROPDOWN_SOURCE: &str = "brandData";

/// Secondary source attached to similar-compound controls regardless of the
/// field's own type.
pub const SIMILAR_DROPDOWN_SOURCE: &str = "brandData";

/// Field-id to dropdown-source-key table.
const DROPDOWN_SOURCES: &[(&str, &str)] = &[
    ("DD-EN-1", "brandData"),
    ("DD-EN-2", "stateData"),
    ("DD-EN-3", "stateData"),
    ("DD-EN-4", "brandData"),
    ("DD-EN-5", "brandData"),
    ("DD-EN-6", "stateData"),
    ("DD-EN-7", "brandData"),
    ("DD-EN-8", "stateData"),
    ("DD-EN-9", "brandData"),
    ("DD-EN-10", "stateData"),
    ("status", "statusData"),
    ("category", "categoryData"),
    ("type", "typeData"),
];

/// Look up the dropdown data source feeding a field's control.
/// Unmapped fields use [`DEFAULT_DROPDOWN_SOURCE`].
pub fn dropdown_source(field_id: &str) -> &'static str {
    DROPDOWN_SOURCES
        .iter()
        .find(|(id, _)| *id == field_id)
        .map(|(_, source)| *source)
        .unwrap_or(DEFAULT_DROPDOWN_SOURCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_field_types() {
        assert_eq!(resolve_field_type("Age"), FieldType::Number);
        assert_eq!(resolve_field_type("Name"), FieldType::Text);
        assert_eq!(resolve_field_type("Document"), FieldType::Date);
        assert_eq!(resolve_field_type("PinCode"), FieldType::Dropdown);
        assert_eq!(resolve_field_type("-1"), FieldType::Button);
    }

    #[test]
    fn test_unknown_field_defaults_to_text() {
        assert_eq!(resolve_field_type("no-such-field"), FieldType::Text);
        assert_eq!(resolve_field_type(""), FieldType::Text);
    }

    #[test]
    fn test_dropdown_source_lookup() {
        assert_eq!(dropdown_source("DD-EN-2"), "stateData");
        assert_eq!(dropdown_source("status"), "statusData");
        assert_eq!(dropdown_source("unmapped"), DEFAULT_DROPDOWN_SOURCE);
    }

    #[test]
    fn test_field_type_string_roundtrip() {
        for ft in [
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::Bool,
            FieldType::Dropdown,
            FieldType::Time,
            FieldType::Button,
            FieldType::Unknown,
        ] {
            assert_eq!(FieldType::from_str(ft.as_str()), Some(ft));
        }
        assert_eq!(FieldType::from_str("widget"), None);
    }
}
