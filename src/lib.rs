//! # ddb_flatten
//!
//! Flatten DynamoDB-style typed attribute JSON into plain JSON documents.
//!
//! ## What does it do?
//!
//! Documents written in the DynamoDB attribute-value convention wrap every
//! value in a one-key object naming its type. This crate strips those
//! wrappers and coerces each value to its native JSON type:
//!
//! ```rust
//! use ddb_flatten::{from_str, to_string};
//!
//! let input = r#"{
//!     "name":    {"S": "  Alice  "},
//!     "age":     {"N": "30"},
//!     "admin":   {"BOOL": "t"},
//!     "joined":  {"S": "2021-01-01T00:00:00Z"},
//!     "address": {"M": {"city": {"S": "Oslo"}}},
//!     "tags":    {"L": [{"S": "rust"}, {"N": "7"}]}
//! }"#;
//!
//! let doc = from_str(input).unwrap();
//! assert_eq!(
//!     to_string(&doc).unwrap(),
//!     r#"{"name":"Alice","age":30,"admin":true,"joined":1609459200,"address":{"city":"Oslo"},"tags":["rust",7]}"#
//! );
//! ```
//!
//! ## Key Features
//!
//! - **Six tags**: `S`, `N`, `BOOL`, `NULL`, `M` and `L`; anything else is ignored
//! - **Timestamps**: RFC 3339 strings become Unix epoch seconds
//! - **Forgiving**: unparsable numbers, blank field names, empty maps and lists,
//!   and malformed list elements are dropped instead of failing
//! - **Strict where it matters**: an `M` tag that does not hold an object aborts
//!   the whole document
//! - **Ordered**: output fields keep the order of the input fields
//!
//! ## Pipeline
//!
//! Input flows through three stages, each usable on its own:
//!
//! 1. JSON text is parsed into a [`serde_json::Value`]
//! 2. [`de::decode`] turns it into a [`TypedDocument`]
//! 3. [`flatten()`] turns that into a [`PlainMap`]
//!
//! The `ddb-flatten` binary wraps the same pipeline for files on disk.

pub mod de;
pub mod error;
pub mod flatten;
pub mod map;
pub mod options;
pub mod typed;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten, flatten_with_options};
pub use map::PlainMap;
pub use options::{FlattenOptions, TagConflict};
pub use typed::{AttributeValue, ListItem, Tag, TypedDocument, TypedField};
pub use value::{Number, PlainValue};

use std::io;
use std::path::Path;
use tracing::debug;

/// Flattens a typed JSON document given as text.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::from_str;
///
/// let doc = from_str(r#"{"a": {"S": "  hello  "}}"#).unwrap();
/// assert_eq!(doc.get("a").and_then(|v| v.as_str()), Some("hello"));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, the root is not an object,
/// or an `M` attribute does not hold an object.
pub fn from_str(s: &str) -> Result<PlainMap> {
    from_str_with_options(s, &FlattenOptions::default())
}

/// Flattens a typed JSON document given as text, with custom options.
///
/// # Errors
///
/// As [`from_str`], plus [`Error::ConflictingTags`] under [`TagConflict::Reject`].
pub fn from_str_with_options(s: &str, options: &FlattenOptions) -> Result<PlainMap> {
    let value: serde_json::Value = serde_json::from_str(s)?;
    from_value_with_options(&value, options)
}

/// Flattens a typed JSON document given as bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON or the document is malformed.
pub fn from_slice(v: &[u8]) -> Result<PlainMap> {
    let value: serde_json::Value = serde_json::from_slice(v)?;
    from_value(&value)
}

/// Flattens a typed JSON document read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(br#"{"n": {"N": "1.5"}}"#)).unwrap();
/// assert_eq!(doc.get("n").and_then(|v| v.as_f64()), Some(1.5));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON, or the
/// document is malformed.
pub fn from_reader<R>(reader: R) -> Result<PlainMap>
where
    R: io::Read,
{
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    from_value(&value)
}

/// Flattens an already parsed JSON document.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::from_value;
/// use serde_json::json;
///
/// let doc = from_value(&json!({"a": {"M": {}}})).unwrap();
/// assert!(doc.is_empty());
///
/// assert!(from_value(&json!({"a": {"M": "not-a-map"}})).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the root is not an object or an `M` attribute does not
/// hold an object.
pub fn from_value(value: &serde_json::Value) -> Result<PlainMap> {
    from_value_with_options(value, &FlattenOptions::default())
}

/// Flattens an already parsed JSON document, with custom options.
///
/// # Errors
///
/// As [`from_value`], plus [`Error::ConflictingTags`] under [`TagConflict::Reject`].
pub fn from_value_with_options(
    value: &serde_json::Value,
    options: &FlattenOptions,
) -> Result<PlainMap> {
    let doc = de::decode(value)?;
    flatten_with_options(&doc, options)
}

/// Reads and flattens a typed JSON document from a `.json` file.
///
/// # Errors
///
/// Returns [`Error::NotJson`] for paths without a `.json` extension, an I/O
/// error if the file cannot be read, or any error from [`from_str`].
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PlainMap> {
    from_path_with_options(path, &FlattenOptions::default())
}

/// Reads and flattens a typed JSON document from a `.json` file, with custom options.
///
/// # Errors
///
/// As [`from_path`].
pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: &FlattenOptions) -> Result<PlainMap> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(Error::not_json(&path.display().to_string()));
    }

    debug!(path = %path.display(), "reading typed document");
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
    from_str_with_options(&text, options)
}

/// Encodes a flattened document as compact JSON.
///
/// # Errors
///
/// Returns an error if the document cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(doc: &PlainMap) -> Result<String> {
    to_string_with_options(doc, &FlattenOptions::default())
}

/// Encodes a flattened document as indented JSON.
///
/// # Errors
///
/// Returns an error if the document cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(doc: &PlainMap) -> Result<String> {
    to_string_with_options(doc, &FlattenOptions::pretty())
}

/// Encodes a flattened document as JSON, honouring `options.pretty`.
///
/// # Errors
///
/// Returns an error if the document cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(doc: &PlainMap, options: &FlattenOptions) -> Result<String> {
    let encoded = if options.pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(encoded)
}

/// Writes a flattened document to `writer` as JSON, honouring `options.pretty`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn to_writer<W>(writer: W, doc: &PlainMap, options: &FlattenOptions) -> Result<()>
where
    W: io::Write,
{
    if options.pretty {
        serde_json::to_writer_pretty(writer, doc)?;
    } else {
        serde_json::to_writer(writer, doc)?;
    }
    Ok(())
}
