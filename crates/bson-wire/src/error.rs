use crate::element_type::ElementType;

/// Byte-level failures while delimiting BSON elements.
///
/// None of these are recoverable for the buffer that produced them: the
/// format has no resynchronization points, so once a length or terminator
/// is wrong every following byte is suspect.
///
/// ```text
///   WireError
///   ├── MissingTerminator      ← cstring (name / regex part) has no 0x00
///   ├── TruncatedInput         ← fixed-width or prefixed read past the end
///   ├── UnknownType            ← tag byte not in the element type table
///   ├── InvalidLength          ← length prefix can't describe its own layout
///   └── BadDocumentTerminator  ← document's last byte is not 0x00
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// No 0x00 byte was found before the end of the buffer.
    #[error("cstring missing null terminator")]
    MissingTerminator,

    /// A read needed more bytes than the buffer holds.
    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// The element tag is not a known BSON type.
    #[error("unknown element type {tag:#04X}")]
    UnknownType { tag: u8 },

    /// A length prefix is too small (or negative) for the value it heads.
    #[error("invalid length prefix {declared} for {element_type} value")]
    InvalidLength {
        element_type: ElementType,
        declared: i32,
    },

    /// A document frame did not end with the 0x00 terminator.
    #[error("document terminator expected 0x00, found {found:#04X}")]
    BadDocumentTerminator { found: u8 },
}
