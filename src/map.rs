//! Ordered map type for flattened documents.
//!
//! [`PlainMap`] wraps an [`IndexMap`] so that flattened fields come out in the
//! same order as the input fields, which keeps the JSON output stable from
//! run to run.
//!
//! ## Examples
//!
//! ```rust
//! use ddb_flatten::{PlainMap, PlainValue};
//!
//! let mut map = PlainMap::new();
//! map.insert("name".to_string(), PlainValue::from("Alice"));
//! map.insert("age".to_string(), PlainValue::from(30.0));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::PlainValue;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An ordered map of field names to flattened values.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::{PlainMap, PlainValue};
///
/// let mut map = PlainMap::new();
/// map.insert("first".to_string(), PlainValue::from(1i64));
/// map.insert("second".to_string(), PlainValue::from(2i64));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlainMap(IndexMap<String, PlainValue>);

impl PlainMap {
    #[must_use]
    pub fn new() -> Self {
        PlainMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PlainMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position and has its value replaced; the old
    /// value is returned.
    pub fn insert(&mut self, key: String, value: PlainValue) -> Option<PlainValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlainValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, PlainValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, PlainValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PlainValue> {
        self.0.iter()
    }
}

impl Serialize for PlainMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl IntoIterator for PlainMap {
    type Item = (String, PlainValue);
    type IntoIter = indexmap::map::IntoIter<String, PlainValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlainMap {
    type Item = (&'a String, &'a PlainValue);
    type IntoIter = indexmap::map::Iter<'a, String, PlainValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, PlainValue)> for PlainMap {
    fn from_iter<T: IntoIterator<Item = (String, PlainValue)>>(iter: T) -> Self {
        PlainMap(IndexMap::from_iter(iter))
    }
}
