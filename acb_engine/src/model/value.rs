//! Row value representation
//!
//! Persisted snapshots come from a loosely-typed front end, so `Value` is an
//! untagged union covering every shape the original payloads use: null,
//! scalars, dropdown items, and arrays (two-element arrays encode dual
//! values such as ranges).

use serde::{Deserialize, Serialize};

use super::refs::DropdownItem;

/// A selection row's value.
///
/// Untagged variant order matters for deserialization: null first, then
/// scalars, then the `{id,label}` object, then arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Item(DropdownItem),
    List(Vec<Value>),
}

impl Value {
    /// Build a two-element dual value from raw scalars.
    pub fn dual(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Value::List(vec![first.into(), second.into()])
    }

    /// True for null, empty strings, items with empty ids, and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(_) | Value::Number(_) => false,
            Value::Text(s) => s.is_empty(),
            Value::Item(item) => item.id.is_empty(),
            Value::List(items) => items.is_empty(),
        }
    }

    /// The scalar rendering used for pattern checks and wire collapse.
    /// Objects and lists have no scalar form.
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(format_number(*n)),
            Value::Text(s) => Some(s.clone()),
            Value::Item(_) | Value::List(_) => None,
        }
    }

    /// The id carried by the value when it is (or wraps) a dropdown item.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Value::Item(item) => Some(item.id.as_str()),
            _ => None,
        }
    }

    /// Dual values are exactly two-element lists.
    pub fn as_dual(&self) -> Option<[&Value; 2]> {
        match self {
            Value::List(items) if items.len() == 2 => Some([&items[0], &items[1]]),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DropdownItem> for Value {
    fn from(item: DropdownItem) -> Self {
        Value::Item(item)
    }
}

/// Integral floats render without a trailing `.0` so `20.0` serializes to
/// the wire as `"20"`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_roundtrip() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Null);
        assert_eq!(serde_json::to_string(&v).unwrap(), "null");
    }

    #[test]
    fn test_scalar_shapes() {
        let v: Value = serde_json::from_str("\"25\"").unwrap();
        assert_eq!(v, Value::Text("25".into()));

        let v: Value = serde_json::from_str("20").unwrap();
        assert_eq!(v, Value::Number(20.0));
        assert_eq!(v.scalar_string().unwrap(), "20");
    }

    #[test]
    fn test_item_shape() {
        let v: Value = serde_json::from_str(r#"{"id":"b1","label":"Brand One"}"#).unwrap();
        assert_eq!(v.item_id(), Some("b1"));
    }

    #[test]
    fn test_dual_detection() {
        let v = Value::dual("10", "20");
        let [lo, hi] = v.as_dual().unwrap();
        assert_eq!(lo.scalar_string().unwrap(), "10");
        assert_eq!(hi.scalar_string().unwrap(), "20");

        assert!(Value::List(vec!["10".into()]).as_dual().is_none());
    }

    #[test]
    fn test_emptiness() {
        assert!(Value::Null.is_empty());
        assert!(Value::Text(String::new()).is_empty());
        assert!(!Value::Text("0".into()).is_empty());
        assert!(!Value::Bool(false).is_empty());
        assert!(Value::Item(DropdownItem::default()).is_empty());
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Value::Number(20.0).scalar_string().unwrap(), "20");
        assert_eq!(Value::Number(-5.5).scalar_string().unwrap(), "-5.5");
    }
}
