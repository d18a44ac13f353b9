use crate::document_frame::MIN_DOCUMENT_LEN;
use crate::element_type::ElementType;
use crate::error::WireError;
use crate::primitive::{I32_LEN, peek_i32_le, read_cstring};

/// ObjectId payload width, also the pointer half of a `DbPointer`.
pub const OBJECT_ID_LEN: usize = 12;

/// Smallest code-with-scope value: int32 total, empty string (int32 + 0x00),
/// empty scope document.
pub const MIN_CODE_WITH_SCOPE_LEN: usize = I32_LEN + I32_LEN + 1 + MIN_DOCUMENT_LEN;

/// Resolve the value length for a raw tag byte.
///
/// Shorthand for [`ElementType::from_tag`] followed by [`value_len`].
///
/// # Errors
///
/// [`WireError::UnknownType`] for unrecognized tags, otherwise whatever
/// [`value_len`] reports.
pub fn resolve_value_len(tag: u8, buf: &[u8]) -> Result<usize, WireError> {
    value_len(ElementType::from_tag(tag)?, buf)
}

/// Number of bytes the value of `element_type` occupies at the front of `buf`.
///
/// `buf` starts right after the element name's terminator. Only the bytes
/// needed to learn the length are inspected (a length prefix or the regex
/// cstrings); whether the whole value fits in `buf` is left to the caller.
///
/// # Errors
///
/// - [`WireError::TruncatedInput`] if a length prefix cannot be read.
/// - [`WireError::InvalidLength`] if a prefix is smaller than its layout allows.
/// - [`WireError::MissingTerminator`] if a regex part is unterminated.
pub fn value_len(element_type: ElementType, buf: &[u8]) -> Result<usize, WireError> {
    let len = match element_type {
        ElementType::Undefined | ElementType::Null | ElementType::MaxKey | ElementType::MinKey => 0,
        ElementType::Boolean => 1,
        ElementType::Int32 => 4,
        ElementType::Double
        | ElementType::DateTime
        | ElementType::Timestamp
        | ElementType::Int64 => 8,
        ElementType::ObjectId => OBJECT_ID_LEN,
        ElementType::Decimal128 => 16,
        ElementType::String | ElementType::JavaScript | ElementType::Symbol => {
            string_len(element_type, buf)?
        }
        ElementType::DbPointer => add_len(string_len(element_type, buf)?, OBJECT_ID_LEN, buf)?,
        ElementType::Binary => {
            // int32 length, subtype byte, then `length` data bytes
            let data_len = prefix(element_type, buf, 0)?;
            add_len(I32_LEN + 1, data_len, buf)?
        }
        ElementType::Document | ElementType::Array => prefix(element_type, buf, MIN_DOCUMENT_LEN)?,
        ElementType::JavaScriptScope => prefix(element_type, buf, MIN_CODE_WITH_SCOPE_LEN)?,
        ElementType::Regex => {
            let (pattern, rest) = read_cstring(buf)?;
            let (options, _) = read_cstring(rest)?;
            pattern.len() + options.len()
        }
    };
    Ok(len)
}

/// `int32 L` followed by `L` bytes, the last of which is the terminator.
fn string_len(element_type: ElementType, buf: &[u8]) -> Result<usize, WireError> {
    let data_len = prefix(element_type, buf, 1)?;
    add_len(I32_LEN, data_len, buf)
}

/// Read the int32 prefix as a length no smaller than `min`.
fn prefix(element_type: ElementType, buf: &[u8], min: usize) -> Result<usize, WireError> {
    let declared = peek_i32_le(buf)?;
    usize::try_from(declared)
        .ok()
        .filter(|&len| len >= min)
        .ok_or(WireError::InvalidLength {
            element_type,
            declared,
        })
}

fn add_len(a: usize, b: usize, buf: &[u8]) -> Result<usize, WireError> {
    a.checked_add(b).ok_or(WireError::TruncatedInput {
        needed: usize::MAX,
        available: buf.len(),
    })
}
