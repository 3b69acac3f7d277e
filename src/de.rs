//! Decoding JSON into typed attribute documents.
//!
//! [`decode`] walks a parsed [`serde_json::Value`] once and turns it into a
//! [`TypedDocument`]. Shape problems are sorted into two groups:
//!
//! - **Tolerated**: blank field names, field values that are not objects,
//!   unknown tags, `L` operands that are not arrays, and malformed list
//!   elements. These are skipped (with a trace event) and never fail.
//! - **Fatal**: an `M` operand that is not an object, or an `S`/`N`/`BOOL`/`NULL`
//!   operand that is not a string. These abort the whole decode.
//!
//! ## Usage
//!
//! ```rust
//! use ddb_flatten::de::decode;
//! use serde_json::json;
//!
//! let doc = decode(&json!({"a": {"S": "x"}, "b": "untyped"})).unwrap();
//! assert_eq!(doc.len(), 1);
//!
//! assert!(decode(&json!({"a": {"M": "not-a-map"}})).is_err());
//! ```

use crate::typed::{AttributeValue, ListItem, Tag, TypedDocument, TypedField};
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::trace;

/// Decodes a JSON document into a [`TypedDocument`].
///
/// # Errors
///
/// Returns [`Error::NotADocument`] when the root is not an object,
/// [`Error::MalformedMap`] for an `M` operand that is not an object and
/// [`Error::InvalidOperand`] for a scalar tag whose operand is not a string.
pub fn decode(value: &Value) -> Result<TypedDocument> {
    match value {
        Value::Object(fields) => decode_fields(fields, ""),
        other => Err(Error::not_a_document(kind(other))),
    }
}

fn decode_fields(fields: &Map<String, Value>, parent: &str) -> Result<TypedDocument> {
    let mut doc = TypedDocument::new();

    for (name, value) in fields {
        if name.trim().is_empty() {
            trace!(parent = parent, "skipping field with a blank name");
            continue;
        }
        let path = child_path(parent, name.trim());

        let Value::Object(attributes) = value else {
            trace!(%path, found = kind(value), "skipping field without a type tag");
            continue;
        };

        let field = decode_field(attributes, &path)?;
        if field.is_empty() {
            trace!(%path, "skipping field without a recognised type tag");
            continue;
        }
        doc.insert_field(name.clone(), field);
    }

    Ok(doc)
}

fn decode_field(attributes: &Map<String, Value>, path: &str) -> Result<TypedField> {
    let mut field = TypedField::new();

    for (name, operand) in attributes {
        let Some(tag) = Tag::parse(name.trim()) else {
            trace!(%path, tag = name.as_str(), "ignoring unknown type tag");
            continue;
        };

        let attribute = match tag {
            Tag::S => AttributeValue::S(string_operand(operand, tag, path)?),
            Tag::N => AttributeValue::N(string_operand(operand, tag, path)?),
            Tag::Bool => AttributeValue::Bool(string_operand(operand, tag, path)?),
            Tag::Null => AttributeValue::Null(string_operand(operand, tag, path)?),
            Tag::M => match operand {
                Value::Object(fields) => AttributeValue::M(decode_fields(fields, path)?),
                other => return Err(Error::malformed_map(path, kind(other))),
            },
            Tag::L => match operand {
                Value::Array(elements) => AttributeValue::L(decode_list(elements, path)),
                other => {
                    trace!(%path, found = kind(other), "skipping L attribute that is not an array");
                    continue;
                }
            },
        };
        field.push(attribute);
    }

    Ok(field)
}

fn decode_list(elements: &[Value], path: &str) -> Vec<ListItem> {
    let mut items = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let Value::Object(attributes) = element else {
            trace!(%path, index = index, "skipping list element without a type tag");
            continue;
        };

        for (name, operand) in attributes {
            let Value::String(operand) = operand else {
                trace!(%path, index = index, tag = name.as_str(), "skipping list element with a non-string operand");
                continue;
            };
            match Tag::parse(name.trim()) {
                Some(Tag::S) => items.push(ListItem::S(operand.clone())),
                Some(Tag::N) => items.push(ListItem::N(operand.clone())),
                Some(Tag::Bool) => items.push(ListItem::Bool(operand.clone())),
                _ => trace!(%path, index = index, tag = name.as_str(), "skipping unsupported list element tag"),
            }
        }
    }

    items
}

fn string_operand(operand: &Value, tag: Tag, path: &str) -> Result<String> {
    match operand {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::invalid_operand(path, tag.as_str(), kind(other))),
    }
}

pub(crate) fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
