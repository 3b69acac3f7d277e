//! Typed attribute documents, the input side of the flattener.
//!
//! A [`TypedDocument`] maps field names to attribute values written in the
//! DynamoDB attribute-value convention: every value is wrapped in a one-key
//! object whose key is a type tag.
//!
//! ```text
//! {
//!   "name":    {"S": "Alice"},
//!   "age":     {"N": "30"},
//!   "active":  {"BOOL": "true"},
//!   "address": {"M": {"city": {"S": "Oslo"}}},
//!   "tags":    {"L": [{"S": "admin"}, {"N": "7"}]}
//! }
//! ```
//!
//! Documents are normally produced by [`decode`](crate::de::decode) or by
//! deserializing from JSON; they can also be assembled by hand:
//!
//! ```rust
//! use ddb_flatten::{flatten, AttributeValue, TypedDocument};
//!
//! let mut doc = TypedDocument::new();
//! doc.insert("name", AttributeValue::S(" Alice ".to_string()));
//! doc.insert("age", AttributeValue::N("30".to_string()));
//!
//! let plain = flatten(&doc).unwrap();
//! assert_eq!(plain.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// The recognised type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    S,
    N,
    Bool,
    Null,
    M,
    L,
}

impl Tag {
    /// Recognises a tag name. Names are case-sensitive; callers trim first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ddb_flatten::Tag;
    ///
    /// assert_eq!(Tag::parse("BOOL"), Some(Tag::Bool));
    /// assert_eq!(Tag::parse("bool"), None);
    /// assert_eq!(Tag::parse("SS"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Tag> {
        match name {
            "S" => Some(Tag::S),
            "N" => Some(Tag::N),
            "BOOL" => Some(Tag::Bool),
            "NULL" => Some(Tag::Null),
            "M" => Some(Tag::M),
            "L" => Some(Tag::L),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::S => "S",
            Tag::N => "N",
            Tag::Bool => "BOOL",
            Tag::Null => "NULL",
            Tag::M => "M",
            Tag::L => "L",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed attribute. Scalar operands are kept verbatim; coercion happens
/// when flattening.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    S(String),
    N(String),
    Bool(String),
    Null(String),
    M(TypedDocument),
    L(Vec<ListItem>),
}

impl AttributeValue {
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            AttributeValue::S(_) => Tag::S,
            AttributeValue::N(_) => Tag::N,
            AttributeValue::Bool(_) => Tag::Bool,
            AttributeValue::Null(_) => Tag::Null,
            AttributeValue::M(_) => Tag::M,
            AttributeValue::L(_) => Tag::L,
        }
    }
}

/// An element of an `L` attribute. Lists only carry scalar strings, numbers
/// and booleans.
#[derive(Clone, Debug, PartialEq)]
pub enum ListItem {
    S(String),
    N(String),
    Bool(String),
}

/// The recognised attributes found under a single field, in document order.
///
/// Well-formed input has exactly one.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TypedField(Vec<AttributeValue>);

impl TypedField {
    #[must_use]
    pub fn new() -> Self {
        TypedField(Vec::new())
    }

    pub fn push(&mut self, attribute: AttributeValue) {
        self.0.push(attribute);
    }

    #[must_use]
    pub fn attributes(&self) -> &[AttributeValue] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<AttributeValue> for TypedField {
    fn from(attribute: AttributeValue) -> Self {
        TypedField(vec![attribute])
    }
}

impl FromIterator<AttributeValue> for TypedField {
    fn from_iter<T: IntoIterator<Item = AttributeValue>>(iter: T) -> Self {
        TypedField(iter.into_iter().collect())
    }
}

/// An ordered mapping of field names to typed fields.
///
/// Field names are stored as written; the flattener trims them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TypedDocument(IndexMap<String, TypedField>);

impl TypedDocument {
    #[must_use]
    pub fn new() -> Self {
        TypedDocument(IndexMap::new())
    }

    /// Adds an attribute under `name`, after any attribute already recorded for it.
    pub fn insert(&mut self, name: impl Into<String>, attribute: AttributeValue) {
        self.0.entry(name.into()).or_default().push(attribute);
    }

    /// Records a whole field, replacing any field previously stored under `name`.
    pub fn insert_field(&mut self, name: impl Into<String>, field: TypedField) {
        self.0.insert(name.into(), field);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypedField> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TypedField> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TypedDocument {
    type Item = (&'a String, &'a TypedField);
    type IntoIter = indexmap::map::Iter<'a, String, TypedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TypedDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        crate::de::decode(&value).map_err(D::Error::custom)
    }
}
