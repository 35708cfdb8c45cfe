//! Row validation engine
//!
//! Validation failures are never errors: every check returns a structured
//! result the caller renders as messaging. The three per-row checks (parent,
//! operator, value) are pure; only [`validate_all`] has the documented side
//! effect of marking touched flags.

pub mod types;

pub use types::{RowFailure, ValidationCheck, ValidationReport};

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::fields::FieldType;
use crate::catalog::operators::OperatorId;
use crate::control::{self, ControlKind, ValueControl};
use crate::model::{ParentSelection, SelectionRow, Value};

/// Strict numeric pattern. `"0"` is valid; a bare `"-"` or `"."` is not.
const NUMERIC_PATTERN: &str = r"^-?\d*\.?\d+$";

fn numeric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMERIC_PATTERN).expect("numeric pattern is valid"))
}

/// A scalar matching the strict numeric pattern, not merely truthy.
fn is_numeric(value: &Value) -> bool {
    value
        .scalar_string()
        .map(|s| numeric_regex().is_match(&s))
        .unwrap_or(false)
}

/// Parent validity: a non-empty `parent.id`, or a non-empty multi-select.
pub fn is_parent_valid(row: &SelectionRow) -> bool {
    if !row.parent.id.is_empty() {
        return true;
    }
    match &row.parent_selected {
        ParentSelection::None => false,
        ParentSelection::One(item) => !item.id.is_empty(),
        ParentSelection::Many(items) => !items.is_empty(),
    }
}

/// Operator validity: chosen and carrying a non-empty id.
pub fn is_operator_valid(row: &SelectionRow) -> bool {
    row.operator
        .as_ref()
        .map(|op| !op.id.is_empty())
        .unwrap_or(false)
}

/// Whether the multi-select parent control should be shown for a row:
/// explicit multi-select mode, or an unset parent without an explicit
/// single-select decision.
pub fn should_show_parent_dropdown(row: &SelectionRow) -> bool {
    row.is_parent_array || row.parent.id.is_empty()
}

/// Value validity for a row, given its resolved control shape.
pub fn is_value_valid(row: &SelectionRow, control: &ValueControl) -> bool {
    if !control.show {
        return true;
    }

    if control.is_similar {
        return match row.value.as_dual() {
            Some([first, second]) => !first.is_empty() && !second.is_empty(),
            None => false,
        };
    }

    if control.dual {
        let Some([first, second]) = row.value.as_dual() else {
            return false;
        };
        return match control.kind {
            ControlKind::Number => is_numeric(first) && is_numeric(second),
            _ => !first.is_empty() && !second.is_empty(),
        };
    }

    match control.kind {
        ControlKind::Number => is_numeric(&row.value),
        ControlKind::Dropdown => {
            row.value.item_id().map(|id| !id.is_empty()).unwrap_or(false)
                || matches!(&row.value, Value::Text(s) if !s.is_empty())
        }
        _ => !row.value.is_empty(),
    }
}

/// Convenience: value validity with the control resolved on the fly.
pub fn is_row_value_valid(row: &SelectionRow) -> bool {
    is_value_valid(row, &control::resolve(row))
}

/// Validate every row, marking all touched flags as a side effect so
/// previously-hidden errors for edited rows become visible.
pub fn validate_all(rows: &mut [SelectionRow]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (index, row) in rows.iter_mut().enumerate() {
        row.touch_all();

        let mut failed = Vec::new();
        if !is_parent_valid(row) {
            failed.push(ValidationCheck::Parent);
        }
        if !is_operator_valid(row) {
            failed.push(ValidationCheck::Operator);
        }
        let control = control::resolve(row);
        if !is_value_valid(row, &control) {
            failed.push(ValidationCheck::Value);
        }

        if !failed.is_empty() {
            report.add_failure(RowFailure {
                index,
                field_id: row.field.id.clone(),
                field_label: row.field.label.clone(),
                failed,
            });
        }
    }

    report
}

/// True when a button-kind row still needs a value. Buttons carry their own
/// truthiness rules: dual button operators need both halves, single buttons
/// any non-empty value.
pub fn is_button_value_valid(row: &SelectionRow) -> bool {
    let operator = OperatorId::from_str(row.operator_id());
    if control::row_field_type(row) != FieldType::Button {
        return true;
    }
    match operator {
        Some(op) if op.is_dual() => match row.value.as_dual() {
            Some([first, second]) => !first.is_empty() && !second.is_empty(),
            None => false,
        },
        _ => !row.value.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DropdownItem, FieldRef, OperatorRef, ParentRef};

    fn row(field_id: &str, operator_id: &str, value: Value) -> SelectionRow {
        let mut row = SelectionRow::for_field(
            FieldRef::new(field_id, field_id),
            ParentRef::empty(),
            "en",
            false,
        );
        row.operator = Some(OperatorRef::new(operator_id, operator_id));
        row.value = value;
        row
    }

    #[test]
    fn test_parent_validity() {
        let mut r = row("Age", "equals", Value::Null);
        assert!(!is_parent_valid(&r));

        r.parent = ParentRef::new("100", "Employee Records");
        assert!(is_parent_valid(&r));

        r.parent = ParentRef::empty();
        r.parent_selected = ParentSelection::One(DropdownItem::new("100", "Employee Records"));
        assert!(is_parent_valid(&r));

        r.parent_selected = ParentSelection::One(DropdownItem::new("", ""));
        assert!(!is_parent_valid(&r));

        r.parent_selected = ParentSelection::Many(vec![DropdownItem::new("1", "A")]);
        assert!(is_parent_valid(&r));

        r.parent_selected = ParentSelection::Many(Vec::new());
        assert!(!is_parent_valid(&r));
    }

    #[test]
    fn test_operator_validity() {
        let mut r = row("Age", "equals", Value::Null);
        assert!(is_operator_valid(&r));
        r.operator = Some(OperatorRef::new("", ""));
        assert!(!is_operator_valid(&r));
        r.operator = None;
        assert!(!is_operator_valid(&r));
    }

    #[test]
    fn test_no_value_operator_is_always_valid() {
        let r = row("Name", "empty", Value::Null);
        assert!(is_row_value_valid(&r));
    }

    #[test]
    fn test_dual_numeric_range() {
        let r = row("Age", "between", Value::dual("10", "20"));
        assert!(is_row_value_valid(&r));

        let r = row("Age", "between", Value::dual("10", ""));
        assert!(!is_row_value_valid(&r));

        let r = row("Age", "between", Value::dual("-5.5", "0"));
        assert!(is_row_value_valid(&r));

        // Not a two-element array at all.
        let r = row("Age", "between", Value::Text("10".into()));
        assert!(!is_row_value_valid(&r));
    }

    #[test]
    fn test_single_numeric_strictness() {
        assert!(is_row_value_valid(&row("Age", "equals", "0".into())));
        assert!(is_row_value_valid(&row("Age", "equals", "-12.25".into())));
        assert!(!is_row_value_valid(&row("Age", "equals", "12a".into())));
        assert!(!is_row_value_valid(&row("Age", "equals", "-".into())));
        assert!(!is_row_value_valid(&row("Age", "equals", Value::Null)));
    }

    #[test]
    fn test_similar_requires_both_halves() {
        let r = row(
            "Name",
            "similar",
            Value::List(vec!["abc".into(), Value::Item(DropdownItem::new("b1", "Brand"))]),
        );
        assert!(is_row_value_valid(&r));

        let r = row("Name", "similar", Value::dual("abc", ""));
        assert!(!is_row_value_valid(&r));
    }

    #[test]
    fn test_dropdown_value_by_id() {
        let r = row(
            "PinCode",
            "equals",
            Value::Item(DropdownItem::new("z1", "Zone 1")),
        );
        assert!(is_row_value_valid(&r));

        let r = row("PinCode", "equals", Value::Item(DropdownItem::default()));
        assert!(!is_row_value_valid(&r));

        // A raw scalar id is also accepted for dropdown controls.
        let r = row("PinCode", "equals", "z1".into());
        assert!(is_row_value_valid(&r));
    }

    #[test]
    fn test_text_value_presence() {
        assert!(is_row_value_valid(&row("Name", "contains", "an".into())));
        assert!(!is_row_value_valid(&row("Name", "contains", "".into())));
        assert!(!is_row_value_valid(&row("Name", "contains", Value::Null)));
    }

    #[test]
    fn test_validate_all_reports_and_touches() {
        let mut rows = vec![
            row("Age", "equals", "25".into()),
            row("Name", "contains", Value::Null),
        ];
        rows[0].parent = ParentRef::new("100", "Employee Records");

        let report = validate_all(&mut rows);
        assert!(!report.is_valid);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert!(report.failures[0]
            .failed
            .contains(&ValidationCheck::Parent));
        assert!(report.failures[0].failed.contains(&ValidationCheck::Value));
        assert_eq!(report.invalid_fields(), vec!["Name".to_string()]);

        // Side effect: every row is now touched, including valid ones.
        assert!(rows.iter().all(|r| r.parent_touched && r.operator_touched));
    }

    #[test]
    fn test_validate_all_clean_report() {
        let mut rows = vec![row("Age", "equals", "25".into())];
        rows[0].parent = ParentRef::new("100", "Employee Records");
        let report = validate_all(&mut rows);
        assert!(report.is_valid);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_button_value_rules() {
        let r = row("-1", "equals", Value::Bool(true));
        assert!(is_button_value_valid(&r));

        let r = row("-1", "between", Value::dual("a", "b"));
        assert!(is_button_value_valid(&r));

        let r = row("-1", "between", Value::Null);
        assert!(!is_button_value_valid(&r));
    }
}
