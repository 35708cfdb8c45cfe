//! Operator semantics
//!
//! The operator id space is closed: every operator a catalog can serve is a
//! variant here, and the no-value / dual-value / similar-compound subsets
//! are pure predicates over that enumeration.

use serde::{Deserialize, Serialize};

use crate::model::{FieldRef, OperatorRef};

use super::fields::FieldType;

/// Closed enumeration of operator ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorId {
    Equals,
    NotEquals,
    Greater,
    Less,
    GreaterEquals,
    LessEquals,
    Contains,
    StartsWith,
    EndsWith,
    Between,
    In,
    NotIn,
    /// Sentinel shown before the user has chosen a real operator.
    Select,
    Empty,
    NotEmpty,
    Yes,
    No,
    NotBetween,
    Similar,
    ContainsDate,
}

impl OperatorId {
    /// The wire/storage spelling of the operator id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notequals",
            Self::Greater => "greater",
            Self::Less => "less",
            Self::GreaterEquals => "greaterequals",
            Self::LessEquals => "lessequals",
            Self::Contains => "contains",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
            Self::Between => "between",
            Self::In => "in",
            Self::NotIn => "notin",
            Self::Select => "select",
            Self::Empty => "empty",
            Self::NotEmpty => "not_empty",
            Self::Yes => "yes",
            Self::No => "no",
            Self::NotBetween => "not_between",
            Self::Similar => "similar",
            Self::ContainsDate => "contains_date",
        }
    }

    /// Parse an operator id, case-insensitively (persisted snapshots are
    /// not guaranteed to be lowercase).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "equals" => Some(Self::Equals),
            "notequals" => Some(Self::NotEquals),
            "greater" => Some(Self::Greater),
            "less" => Some(Self::Less),
            "greaterequals" => Some(Self::GreaterEquals),
            "lessequals" => Some(Self::LessEquals),
            "contains" => Some(Self::Contains),
            "startswith" => Some(Self::StartsWith),
            "endswith" => Some(Self::EndsWith),
            "between" => Some(Self::Between),
            "in" => Some(Self::In),
            "notin" => Some(Self::NotIn),
            "select" => Some(Self::Select),
            "empty" => Some(Self::Empty),
            "not_empty" => Some(Self::NotEmpty),
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "not_between" => Some(Self::NotBetween),
            "similar" => Some(Self::Similar),
            "contains_date" => Some(Self::ContainsDate),
            _ => None,
        }
    }

    /// Operators that require no value at all.
    pub const fn is_no_value(self) -> bool {
        matches!(self, Self::Empty | Self::NotEmpty | Self::Yes | Self::No)
    }

    /// Operators requiring two values (ranges and compounds).
    pub const fn is_dual(self) -> bool {
        matches!(
            self,
            Self::Between | Self::NotBetween | Self::Similar | Self::ContainsDate
        )
    }

    /// The similar-compound operator: a value plus a fixed-category pick.
    pub const fn is_similar(self) -> bool {
        matches!(self, Self::Similar)
    }
}

impl std::fmt::Display for OperatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default operator candidates per field type, in priority order.
pub fn default_operator_priority(field_type: FieldType) -> &'static [OperatorId] {
    match field_type {
        FieldType::Bool => &[OperatorId::Yes, OperatorId::Equals, OperatorId::Empty],
        _ => &[OperatorId::Equals, OperatorId::Empty],
    }
}

/// Pick the default operator for a new row: the first priority candidate
/// present in the available list. No silent fallback to an arbitrary
/// operator; absent candidates yield `None`.
pub fn pick_default_operator(
    available: &[OperatorRef],
    field_type: FieldType,
) -> Option<OperatorRef> {
    for candidate in default_operator_priority(field_type) {
        if let Some(op) = available.iter().find(|op| op.id == candidate.as_str()) {
            return Some(op.clone());
        }
    }
    None
}

/// Per-locale operator tables as served by the catalog provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorCatalog {
    pub string_operations: Vec<OperatorRef>,
    pub number_operations: Vec<OperatorRef>,
    pub date_operations: Vec<OperatorRef>,
    pub bool_operations: Vec<OperatorRef>,
    pub time_operations: Vec<OperatorRef>,
}

impl OperatorCatalog {
    /// The operator list offered for a field of the given type.
    /// Dropdown and unknown fields fall back to string operations.
    pub fn operations_for(&self, field_type: FieldType) -> &[OperatorRef] {
        match field_type {
            FieldType::Bool => &self.bool_operations,
            FieldType::Number => &self.number_operations,
            FieldType::Date => &self.date_operations,
            FieldType::Time => &self.time_operations,
            _ => &self.string_operations,
        }
    }

    /// The operator list offered for a field, via its id.
    pub fn operations_for_field(&self, field: &FieldRef) -> &[OperatorRef] {
        self.operations_for(super::fields::resolve_field_type(&field.id))
    }

    /// Search every category table for an operator id. Used by relabeling.
    pub fn find(&self, operator_id: &str) -> Option<&OperatorRef> {
        [
            &self.string_operations,
            &self.number_operations,
            &self.date_operations,
            &self.bool_operations,
            &self.time_operations,
        ]
        .into_iter()
        .flat_map(|table| table.iter())
        .find(|op| op.id == operator_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ops(ids: &[&str]) -> Vec<OperatorRef> {
        ids.iter().map(|id| OperatorRef::new(*id, *id)).collect()
    }

    #[test]
    fn test_id_roundtrip() {
        for id in [
            OperatorId::Equals,
            OperatorId::NotEmpty,
            OperatorId::NotBetween,
            OperatorId::ContainsDate,
            OperatorId::Select,
        ] {
            assert_eq!(OperatorId::from_str(id.as_str()), Some(id));
        }
        assert_matches!(OperatorId::from_str("EQUALS"), Some(OperatorId::Equals));
        assert_matches!(OperatorId::from_str("bogus"), None);
    }

    #[test]
    fn test_subset_predicates() {
        assert!(OperatorId::Empty.is_no_value());
        assert!(OperatorId::Yes.is_no_value());
        assert!(!OperatorId::Equals.is_no_value());

        assert!(OperatorId::Between.is_dual());
        assert!(OperatorId::Similar.is_dual());
        assert!(OperatorId::ContainsDate.is_dual());
        assert!(!OperatorId::Contains.is_dual());

        assert!(OperatorId::Similar.is_similar());
        assert!(!OperatorId::Between.is_similar());
    }

    #[test]
    fn test_default_operator_priority_order() {
        assert_eq!(
            default_operator_priority(FieldType::Bool)[0],
            OperatorId::Yes
        );
        assert_eq!(
            default_operator_priority(FieldType::Number)[0],
            OperatorId::Equals
        );
    }

    #[test]
    fn test_pick_default_operator_prefers_first_available() {
        let available = ops(&["contains", "empty", "equals"]);
        let picked = pick_default_operator(&available, FieldType::Text).unwrap();
        assert_eq!(picked.id, "equals");

        // Bool priority starts with yes, which is absent here.
        let picked = pick_default_operator(&available, FieldType::Bool).unwrap();
        assert_eq!(picked.id, "equals");
    }

    #[test]
    fn test_pick_default_operator_no_fallback() {
        let available = ops(&["contains", "startswith"]);
        assert_eq!(pick_default_operator(&available, FieldType::Text), None);
    }

    #[test]
    fn test_catalog_table_selection() {
        let catalog = OperatorCatalog {
            string_operations: ops(&["equals", "contains"]),
            number_operations: ops(&["between"]),
            date_operations: ops(&["contains_date"]),
            bool_operations: ops(&["yes", "no"]),
            time_operations: ops(&["greater"]),
        };
        assert_eq!(catalog.operations_for(FieldType::Number)[0].id, "between");
        assert_eq!(catalog.operations_for(FieldType::Dropdown)[0].id, "equals");
        assert_eq!(catalog.operations_for(FieldType::Unknown)[0].id, "equals");
        assert_eq!(catalog.find("contains_date").unwrap().id, "contains_date");
        assert!(catalog.find("similar").is_none());
    }
}
