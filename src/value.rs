//! Flattened value representation.
//!
//! [`PlainValue`] is what a typed attribute turns into once its type tag has
//! been stripped: a native JSON-shaped value.
//!
//! ## Core Types
//!
//! - [`PlainValue`]: null, bool, number, string, array or nested object
//! - [`Number`]: an integer (epoch seconds from timestamps) or a float (`N` attributes)
//!
//! ### Extracting Values
//!
//! ```rust
//! use ddb_flatten::from_str;
//!
//! let doc = from_str(r#"{"age": {"N": "42"}, "created": {"S": "2021-01-01T00:00:00Z"}}"#).unwrap();
//!
//! assert_eq!(doc.get("age").and_then(|v| v.as_f64()), Some(42.0));
//! assert_eq!(doc.get("created").and_then(|v| v.as_i64()), Some(1_609_459_200));
//! ```

use crate::PlainMap;
use serde::{Serialize, Serializer};
use std::fmt;

// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A flattened, natively typed value.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::{PlainValue, Number};
///
/// let null = PlainValue::Null;
/// let num = PlainValue::Number(Number::Float(1.5));
/// let text = PlainValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PlainValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<PlainValue>),
    Object(PlainMap),
}

/// A numeric leaf.
///
/// Timestamps flatten to [`Number::Integer`] epoch seconds, `N` attributes to
/// [`Number::Float`].
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::Number;
///
/// assert_eq!(Number::Integer(42).as_f64(), 42.0);
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// assert_eq!(Number::Float(42.5).as_i64(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Floats convert only when they have no fractional part and fit in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Integer(i) => serializer.serialize_i64(i),
            // Whole floats print without a trailing `.0`.
            Number::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(f as i64)
            }
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl PlainValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, PlainValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, PlainValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, PlainValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, PlainValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, PlainValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, PlainValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlainValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlainValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PlainValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PlainValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<PlainValue>> {
        match self {
            PlainValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&PlainMap> {
        match self {
            PlainValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlainValue::Null => serializer.serialize_unit(),
            PlainValue::Bool(b) => serializer.serialize_bool(*b),
            PlainValue::Number(n) => n.serialize(serializer),
            PlainValue::String(s) => serializer.serialize_str(s),
            PlainValue::Array(arr) => serializer.collect_seq(arr),
            PlainValue::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl From<bool> for PlainValue {
    fn from(value: bool) -> Self {
        PlainValue::Bool(value)
    }
}

impl From<i64> for PlainValue {
    fn from(value: i64) -> Self {
        PlainValue::Number(Number::Integer(value))
    }
}

impl From<f64> for PlainValue {
    fn from(value: f64) -> Self {
        PlainValue::Number(Number::Float(value))
    }
}

impl From<String> for PlainValue {
    fn from(value: String) -> Self {
        PlainValue::String(value)
    }
}

impl From<&str> for PlainValue {
    fn from(value: &str) -> Self {
        PlainValue::String(value.to_string())
    }
}

impl From<Vec<PlainValue>> for PlainValue {
    fn from(value: Vec<PlainValue>) -> Self {
        PlainValue::Array(value)
    }
}

impl From<PlainMap> for PlainValue {
    fn from(value: PlainMap) -> Self {
        PlainValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_floats_serialize_as_integers() {
        let values = PlainValue::Array(vec![
            PlainValue::from(5.0),
            PlainValue::from(-3.0),
            PlainValue::from(2.5),
        ]);
        assert_eq!(serde_json::to_string(&values).unwrap(), "[5,-3,2.5]");
    }

    #[test]
    fn test_huge_whole_float_stays_float() {
        let value = PlainValue::from(1e21);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(1e21));
    }

    #[test]
    fn test_nested_object_serialization() {
        let mut inner = PlainMap::new();
        inner.insert("flag".to_string(), PlainValue::Bool(true));
        inner.insert("gone".to_string(), PlainValue::Null);

        let mut outer = PlainMap::new();
        outer.insert("inner".to_string(), PlainValue::from(inner));
        outer.insert("at".to_string(), PlainValue::from(1_609_459_200i64));

        assert_eq!(
            serde_json::to_string(&outer).unwrap(),
            r#"{"inner":{"flag":true,"gone":null},"at":1609459200}"#
        );
    }

    #[test]
    fn test_accessors() {
        let num = PlainValue::from(42.0);
        assert!(num.is_number());
        assert_eq!(num.as_i64(), Some(42));
        assert_eq!(num.as_f64(), Some(42.0));
        assert_eq!(num.as_str(), None);

        let text = PlainValue::from("hello");
        assert_eq!(text.as_str(), Some("hello"));
        assert_eq!(text.as_bool(), None);

        assert_eq!(PlainValue::default(), PlainValue::Null);
        assert_eq!(Number::Float(0.5).as_i64(), None);
        assert!(Number::Integer(1).is_integer());
        assert!(!Number::Integer(1).is_float());
    }
}
