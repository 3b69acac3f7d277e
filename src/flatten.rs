//! Flattening typed documents into plain ones.
//!
//! The flattener strips the type tag from every attribute and coerces its
//! operand into a native value:
//!
//! | Tag    | Result |
//! |--------|--------|
//! | `S`    | trimmed string, or epoch seconds when the string is an RFC 3339 timestamp |
//! | `N`    | `f64`; unparsable numbers drop the field |
//! | `BOOL` | `true` for `1`/`t`/`true` (any case), `false` for anything else |
//! | `NULL` | `null` when the flag is true, otherwise the field is dropped |
//! | `M`    | nested object; dropped when it flattens to nothing |
//! | `L`    | array of strings, numbers and booleans; dropped when empty |
//!
//! Anything the flattener cannot use is dropped silently. The only errors are
//! the ones raised while decoding and, under [`TagConflict::Reject`], fields
//! carrying several tags.

use crate::de::child_path;
use crate::typed::{AttributeValue, ListItem, TypedDocument, TypedField};
use crate::{Error, FlattenOptions, PlainMap, PlainValue, Result, TagConflict};
use chrono::DateTime;
use tracing::trace;

/// Flattens a typed document with default options.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::{flatten, AttributeValue, TypedDocument};
///
/// let mut doc = TypedDocument::new();
/// doc.insert("a", AttributeValue::S("2021-01-01T00:00:00Z".to_string()));
///
/// let plain = flatten(&doc).unwrap();
/// assert_eq!(plain.get("a").and_then(|v| v.as_i64()), Some(1_609_459_200));
/// ```
///
/// # Errors
///
/// Never fails with default options; see [`flatten_with_options`]. Shape
/// errors in the JSON input (a non-object `M` operand, or a non-string
/// `S`/`N`/`BOOL`/`NULL` operand) are raised earlier, by
/// [`decode`](crate::de::decode) and the `from_*` entry points.
pub fn flatten(doc: &TypedDocument) -> Result<PlainMap> {
    flatten_with_options(doc, &FlattenOptions::default())
}

/// Flattens a typed document.
///
/// # Errors
///
/// Returns [`Error::ConflictingTags`] when `options.tag_conflict` is
/// [`TagConflict::Reject`] and a field carries more than one type tag.
pub fn flatten_with_options(doc: &TypedDocument, options: &FlattenOptions) -> Result<PlainMap> {
    Flattener { options }.document(doc, "")
}

struct Flattener<'a> {
    options: &'a FlattenOptions,
}

impl Flattener<'_> {
    fn document(&self, doc: &TypedDocument, parent: &str) -> Result<PlainMap> {
        let mut output = PlainMap::with_capacity(doc.len());

        for (name, field) in doc {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let path = child_path(parent, name);

            // A later field sharing the trimmed name only wins when it produced a value.
            if let Some(value) = self.field(field, &path)? {
                output.insert(name.to_string(), value);
            }
        }

        Ok(output)
    }

    fn field(&self, field: &TypedField, path: &str) -> Result<Option<PlainValue>> {
        if field.len() > 1 && self.options.tag_conflict == TagConflict::Reject {
            let tags: Vec<&str> = field.attributes().iter().map(|a| a.tag().as_str()).collect();
            return Err(Error::conflicting_tags(path, &tags));
        }

        let mut produced = None;
        for attribute in field.attributes() {
            if let Some(value) = self.attribute(attribute, path)? {
                produced = Some(value);
            }
        }
        Ok(produced)
    }

    fn attribute(&self, attribute: &AttributeValue, path: &str) -> Result<Option<PlainValue>> {
        let value = match attribute {
            AttributeValue::S(s) => Some(string_value(s)),
            AttributeValue::N(n) => {
                let number = parse_number(n).map(PlainValue::from);
                if number.is_none() {
                    trace!(%path, operand = n.as_str(), "dropping field with an unparsable number");
                }
                number
            }
            AttributeValue::Bool(b) => Some(PlainValue::Bool(parse_flag(b))),
            AttributeValue::Null(b) => parse_flag(b).then_some(PlainValue::Null),
            AttributeValue::M(doc) => {
                let nested = self.document(doc, path)?;
                if nested.is_empty() {
                    trace!(%path, "dropping empty nested map");
                    None
                } else {
                    Some(PlainValue::Object(nested))
                }
            }
            AttributeValue::L(items) => {
                let list: Vec<PlainValue> = items.iter().filter_map(list_value).collect();
                if list.is_empty() {
                    trace!(%path, "dropping empty list");
                    None
                } else {
                    Some(PlainValue::Array(list))
                }
            }
        };
        Ok(value)
    }
}

fn list_value(item: &ListItem) -> Option<PlainValue> {
    match item {
        // Unlike a top-level S attribute, an empty string is left out of a list.
        ListItem::S(s) if s.trim().is_empty() => None,
        ListItem::S(s) => Some(string_value(s)),
        ListItem::N(n) => parse_number(n).map(PlainValue::from),
        ListItem::Bool(b) => Some(PlainValue::Bool(parse_flag(b))),
    }
}

/// Trims a string operand and converts RFC 3339 timestamps to epoch seconds.
fn string_value(raw: &str) -> PlainValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PlainValue::String(String::new());
    }
    match parse_timestamp(trimmed) {
        Some(secs) => PlainValue::from(secs),
        None => PlainValue::from(trimmed),
    }
}

/// Parses an RFC 3339 timestamp into epoch seconds.
///
/// Only the strict `YYYY-MM-DDThh:mm:ss[.frac](Z|±hh:mm)` layout counts: an
/// uppercase `T` and `Z`, and no leap second. chrono alone also accepts a
/// space or lowercase separator and second 60.
fn parse_timestamp(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    if bytes.len() < 20 || bytes[10] != b'T' || &bytes[17..19] == b"60" {
        return None;
    }
    let zoned = match bytes[bytes.len() - 1] {
        b'Z' => true,
        _ => {
            let offset = &bytes[bytes.len() - 6..];
            matches!(offset[0], b'+' | b'-') && offset[3] == b':'
        }
    };
    if !zoned {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|timestamp| timestamp.timestamp())
}

/// Parses a number operand. Non-finite results count as unparsable, since
/// JSON cannot carry them.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a boolean operand. Unrecognised strings are false.
fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true")
}
