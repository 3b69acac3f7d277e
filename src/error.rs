//! Error types for decoding and flattening typed attribute documents.
//!
//! Only a handful of conditions are fatal. Most anomalies in the input
//! (unknown type tags, unparsable numbers, malformed list elements, blank
//! field names) are dropped quietly by the flattener and never show up here.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the input is not valid JSON (with line/column information)
//! - **Shape Errors**: an `M` operand that is not an object, or a scalar tag
//!   whose operand is not a string
//! - **Tag Conflicts**: several type tags under one field, when rejected by
//!   [`TagConflict::Reject`](crate::TagConflict::Reject)
//! - **I/O Errors**: file reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use ddb_flatten::{from_str, Error};
//!
//! let result = from_str(r#"{"a": {"M": "not-a-map"}}"#);
//! assert!(matches!(result, Err(Error::MalformedMap { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while decoding or flattening.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input is not valid JSON
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The document root is not a JSON object
    #[error("Expected a JSON object at the document root, found {found}")]
    NotADocument { found: String },

    /// An `M` operand that is not an object
    #[error("Malformed nested map at `{path}`: expected an object under the M tag, found {found}")]
    MalformedMap { path: String, found: String },

    /// A scalar tag whose operand is not a string
    #[error("Invalid operand at `{path}`: the {tag} tag expects a string, found {found}")]
    InvalidOperand {
        path: String,
        tag: String,
        found: String,
    },

    /// More than one type tag under a single field
    #[error("Conflicting type tags at `{path}`: {tags}")]
    ConflictingTags { path: String, tags: String },

    /// The input file does not carry a `.json` extension
    #[error("Input file is not a JSON file: {0}")]
    NotJson(String),
}

impl Error {
    pub fn not_a_document(found: &str) -> Self {
        Error::NotADocument {
            found: found.to_string(),
        }
    }

    /// Creates a malformed nested map error for the field at `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ddb_flatten::Error;
    ///
    /// let err = Error::malformed_map("user.address", "string");
    /// assert!(err.to_string().contains("`user.address`"));
    /// ```
    pub fn malformed_map(path: &str, found: &str) -> Self {
        Error::MalformedMap {
            path: path.to_string(),
            found: found.to_string(),
        }
    }

    pub fn invalid_operand(path: &str, tag: &str, found: &str) -> Self {
        Error::InvalidOperand {
            path: path.to_string(),
            tag: tag.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a tag conflict error listing the tags found under one field.
    pub fn conflicting_tags(path: &str, tags: &[&str]) -> Self {
        Error::ConflictingTags {
            path: path.to_string(),
            tags: tags.join(", "),
        }
    }

    pub fn not_json(path: &str) -> Self {
        Error::NotJson(path.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::io(&err.to_string())
        } else {
            Error::Syntax {
                line: err.line(),
                col: err.column(),
                msg: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_tags_lists_every_tag() {
        let err = Error::conflicting_tags("price", &["S", "N"]);
        assert_eq!(err.to_string(), "Conflicting type tags at `price`: S, N");
    }

    #[test]
    fn test_json_syntax_error_keeps_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        match Error::from(json_err) {
            Error::Syntax { line, col, .. } => {
                assert_eq!(line, 2);
                assert!(col > 0);
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }
}
