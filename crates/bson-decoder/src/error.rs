use bson_wire::{ElementType, WireError};

/// Errors from document-level decoding.
///
/// The element reader itself reports bare [`WireError`]s through its sticky
/// error state; this type adds where in the document things broke and the
/// failures that only make sense across a whole document tree.
///
/// ```text
///   DecodeError
///   ├── Element             ← reader failed on an element (offset, depth)
///   ├── Wire(WireError)     ← top-level document frame rejected
///   ├── TrailingData        ← bytes after the declared document length
///   ├── DepthLimitExceeded  ← nesting deeper than WalkConfig::max_depth
///   └── NotADocument        ← embedded access on a scalar element
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// An element could not be delimited, or the embedded document it
    /// holds has a bad frame.
    ///
    /// `offset` is relative to the start of the body being read, `depth`
    /// is 0 for the top-level document.
    #[error("malformed element at offset {offset} (depth {depth}): {source}")]
    Element {
        offset: usize,
        depth: usize,
        #[source]
        source: WireError,
    },

    /// A document frame (length prefix or terminator) was invalid.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The buffer is longer than the document it holds.
    #[error("unexpected data after document ({extra_bytes} bytes)")]
    TrailingData { extra_bytes: usize },

    /// Documents nest deeper than the configured limit.
    #[error("document nesting exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Embedded document access on an element that is not one.
    #[error("{element_type} element is not a document")]
    NotADocument { element_type: ElementType },
}
