use bson_wire::document_frame::DocumentFrame;

use crate::element::Element;
use crate::error::DecodeError;
use crate::reader::ElementReader;

/// A whole encoded document, frame checked, elements not yet read.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ RawDocument                                  │
/// │   bytes: &[u8]  ← length │ body │ 0x00       │
/// │   body:  &[u8]  ← what ElementReader walks   │
/// └──────────────────────────────────────────────┘
/// ```
///
/// Construction only validates the envelope. Elements are delimited
/// lazily by [`elements`](Self::elements), so a document can be accepted
/// here and still fail partway through a read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawDocument<'a> {
    bytes: &'a [u8],
    body: &'a [u8],
}

impl<'a> RawDocument<'a> {
    /// Wrap `bytes`, which must hold exactly one document.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] if the length prefix or terminator is bad.
    /// - [`DecodeError::TrailingData`] if bytes follow the declared length.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let (frame, consumed) = DocumentFrame::read_from(bytes)?;
        if consumed < bytes.len() {
            return Err(DecodeError::TrailingData {
                extra_bytes: bytes.len() - consumed,
            });
        }
        Ok(Self {
            bytes,
            body: frame.body,
        })
    }

    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The element list between the prefix and the terminator.
    #[must_use]
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// A fresh reader over this document's elements.
    #[must_use]
    pub fn elements(&self) -> ElementReader<'a> {
        ElementReader::new(self.body)
    }

    /// The first element named `key` (without terminator).
    ///
    /// Scans from the start; elements after the match are not read.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Element`] if an element before (or at) the match
    /// cannot be delimited.
    pub fn get(&self, key: &[u8]) -> Result<Option<Element<'a>>, DecodeError> {
        let mut reader = self.elements();
        while let Some(element) =
            reader
                .next_element()
                .map_err(|source| DecodeError::Element {
                    offset: reader.position(),
                    depth: 0,
                    source,
                })?
        {
            if element.key() == key {
                return Ok(Some(element));
            }
        }
        Ok(None)
    }
}

impl<'a> TryFrom<&'a [u8]> for RawDocument<'a> {
    type Error = DecodeError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}
