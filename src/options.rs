//! Configuration options for flattening.
//!
//! - [`FlattenOptions`]: Main configuration struct
//! - [`TagConflict`]: What to do when one field carries several type tags
//!
//! ## Examples
//!
//! ```rust
//! use ddb_flatten::{from_str_with_options, FlattenOptions, TagConflict};
//!
//! let options = FlattenOptions::new().with_tag_conflict(TagConflict::Reject);
//! let result = from_str_with_options(r#"{"a": {"S": "x", "N": "1"}}"#, &options);
//! assert!(result.is_err());
//! ```

/// Policy for fields that carry more than one recognised type tag.
///
/// Well-formed attribute values have exactly one tag, so this only matters
/// for hand-written or corrupted input.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::TagConflict;
///
/// assert_eq!(TagConflict::default(), TagConflict::LastWins);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TagConflict {
    /// Keep the value of the last tag, in document order, that produced one.
    #[default]
    LastWins,
    /// Fail with [`Error::ConflictingTags`](crate::Error::ConflictingTags).
    Reject,
}

/// Configuration options for flattening and re-encoding.
///
/// # Examples
///
/// ```rust
/// use ddb_flatten::{FlattenOptions, TagConflict};
///
/// // Defaults: last tag wins, compact output
/// let options = FlattenOptions::new();
/// assert!(!options.pretty);
///
/// // Strict tags, pretty-printed output
/// let options = FlattenOptions::pretty().with_tag_conflict(TagConflict::Reject);
/// assert_eq!(options.tag_conflict, TagConflict::Reject);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlattenOptions {
    pub tag_conflict: TagConflict,
    pub pretty: bool,
}

impl FlattenOptions {
    /// Creates default options (last tag wins, compact JSON output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed JSON output.
    #[must_use]
    pub fn pretty() -> Self {
        FlattenOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the policy for fields carrying several type tags.
    #[must_use]
    pub fn with_tag_conflict(mut self, tag_conflict: TagConflict) -> Self {
        self.tag_conflict = tag_conflict;
        self
    }

    /// Toggles pretty-printed output.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
