//! Attribute values carried by document nodes.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Attribute map of a document node, keyed by attribute name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value.
///
/// The upstream parser emits scalars (strings, numbers, booleans). Anything
/// else is kept as raw JSON in [`AttrValue::Other`] so that decoding a tree
/// never fails on an attribute the renderer does not care about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit `null`
    Null,
    /// Boolean flag
    Bool(bool),
    /// Numeric value (integers included)
    Number(f64),
    /// String value
    String(String),
    /// Arrays, objects and anything else
    Other(serde_json::Value),
}

impl AttrValue {
    /// Stringify the value, or `None` for `null`.
    ///
    /// Integral numbers print without a fractional part (`3`, not `3.0`).
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::Null => None,
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::String(s) => Some(s.clone()),
            AttrValue::Other(v) => Some(v.to_string()),
        }
    }

    /// Truthiness with JavaScript semantics: `false`, `0`, `NaN`, `""` and
    /// `null` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Bool(b) => *b,
            AttrValue::Number(n) => *n != 0.0 && !n.is_nan(),
            AttrValue::String(s) => !s.is_empty(),
            AttrValue::Other(_) => true,
        }
    }

    /// Integral value of a number, or of a string that parses as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            AttrValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

/// Integral numbers serialize as JSON integers so that `3` survives a round
/// trip as `3`, not `3.0`.
impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Null => serializer.serialize_unit(),
            AttrValue::Bool(b) => serializer.serialize_bool(*b),
            AttrValue::Number(n) => match self.as_integer() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            AttrValue::String(s) => serializer.serialize_str(s),
            AttrValue::Other(v) => v.serialize(serializer),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(AttrValue::from("hi").as_text().as_deref(), Some("hi"));
        assert_eq!(AttrValue::from(3i64).as_text().as_deref(), Some("3"));
        assert_eq!(AttrValue::from(2.5).as_text().as_deref(), Some("2.5"));
        assert_eq!(AttrValue::from(true).as_text().as_deref(), Some("true"));
        assert_eq!(AttrValue::Null.as_text(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(AttrValue::Bool(true).is_truthy());
        assert!(!AttrValue::Bool(false).is_truthy());
        assert!(!AttrValue::Number(0.0).is_truthy());
        assert!(!AttrValue::Number(f64::NAN).is_truthy());
        assert!(AttrValue::Number(1.0).is_truthy());
        assert!(!AttrValue::from("").is_truthy());
        assert!(AttrValue::from("false").is_truthy());
        assert!(!AttrValue::Null.is_truthy());
        assert!(AttrValue::Other(serde_json::json!([])).is_truthy());
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(AttrValue::from(3i64).as_integer(), Some(3));
        assert_eq!(AttrValue::from(" 4 ").as_integer(), Some(4));
        assert_eq!(AttrValue::from(2.5).as_integer(), None);
        assert_eq!(AttrValue::from("two").as_integer(), None);
        assert_eq!(AttrValue::Bool(true).as_integer(), None);
    }

    #[test]
    fn test_deserialize_mixed_map() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"a": "x", "b": 2, "c": false, "d": null, "e": [1]}"#)
                .unwrap();
        assert_eq!(attrs["a"], AttrValue::from("x"));
        assert_eq!(attrs["b"], AttrValue::Number(2.0));
        assert_eq!(attrs["c"], AttrValue::Bool(false));
        assert_eq!(attrs["d"], AttrValue::Null);
        assert!(matches!(attrs["e"], AttrValue::Other(_)));
    }

    #[test]
    fn test_serialize_keeps_integers() {
        let attrs: Attributes = [
            ("level".to_string(), AttrValue::from(3i64)),
            ("ratio".to_string(), AttrValue::from(2.5)),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"level":3,"ratio":2.5}"#
        );
    }
}
