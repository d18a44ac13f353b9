use crate::element_type::ElementType;
use crate::error::WireError;
use crate::primitive::{I32_LEN, read_i32_le};

/// Smallest possible document: the int32 length plus the terminator.
pub const MIN_DOCUMENT_LEN: usize = I32_LEN + 1;

/// Trailing byte of every document.
pub const DOCUMENT_TERMINATOR: u8 = 0x00;

/// Document frame: the envelope around an element list.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ total_len  (int32 LE, counts itself + all below) │
/// │ body       [total_len - 5 bytes of elements]     │
/// │ terminator (0x00)                                │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// Top-level documents, embedded documents and arrays all share this
/// layout; the element reader only ever sees `body`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentFrame<'a> {
    /// The element bytes between the length prefix and the terminator.
    pub body: &'a [u8],
}

impl<'a> DocumentFrame<'a> {
    /// Read a document frame from the front of `buf`.
    ///
    /// # Returns
    ///
    /// `(frame, bytes_consumed)` where `bytes_consumed` is the declared
    /// total length. Bytes past it are not inspected.
    ///
    /// # Errors
    ///
    /// - [`WireError::TruncatedInput`] if the prefix or the declared
    ///   length runs past the end of `buf`.
    /// - [`WireError::InvalidLength`] if the declared length is below
    ///   [`MIN_DOCUMENT_LEN`].
    /// - [`WireError::BadDocumentTerminator`] if the last byte is not 0x00.
    pub fn read_from(buf: &'a [u8]) -> Result<(Self, usize), WireError> {
        let (declared, _) = read_i32_le(buf)?;

        let total_len = usize::try_from(declared)
            .ok()
            .filter(|&len| len >= MIN_DOCUMENT_LEN)
            .ok_or(WireError::InvalidLength {
                element_type: ElementType::Document,
                declared,
            })?;

        if total_len > buf.len() {
            return Err(WireError::TruncatedInput {
                needed: total_len,
                available: buf.len(),
            });
        }

        let terminator = buf[total_len - 1];
        if terminator != DOCUMENT_TERMINATOR {
            return Err(WireError::BadDocumentTerminator { found: terminator });
        }

        Ok((
            Self {
                body: &buf[I32_LEN..total_len - 1],
            },
            total_len,
        ))
    }

    /// Total encoded size: prefix, body, terminator.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.body.len() + MIN_DOCUMENT_LEN
    }
}
