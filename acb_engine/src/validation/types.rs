//! Structured validation results

use serde::{Deserialize, Serialize};

/// The three per-row checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationCheck {
    Parent,
    Operator,
    Value,
}

impl ValidationCheck {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Operator => "operator",
            Self::Value => "value",
        }
    }
}

impl std::fmt::Display for ValidationCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One invalid row and which checks it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFailure {
    pub index: usize,
    pub field_id: String,
    pub field_label: String,
    pub failed: Vec<ValidationCheck>,
}

/// Outcome of validating a full row list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub failures: Vec<RowFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            failures: Vec::new(),
        }
    }

    pub fn add_failure(&mut self, failure: RowFailure) {
        self.is_valid = false;
        self.failures.push(failure);
    }

    /// Labels of the invalid fields, for user-facing messaging. Falls back
    /// to the field id when no label was loaded.
    pub fn invalid_fields(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|failure| {
                if failure.field_label.is_empty() {
                    failure.field_id.clone()
                } else {
                    failure.field_label.clone()
                }
            })
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates_failures() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid);

        report.add_failure(RowFailure {
            index: 0,
            field_id: "Age".into(),
            field_label: String::new(),
            failed: vec![ValidationCheck::Value],
        });
        assert!(!report.is_valid);
        assert_eq!(report.invalid_fields(), vec!["Age".to_string()]);
    }

    #[test]
    fn test_check_serializes_lowercase() {
        let json = serde_json::to_string(&ValidationCheck::Operator).unwrap();
        assert_eq!(json, "\"operator\"");
    }
}
