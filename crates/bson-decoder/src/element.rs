use std::str::Utf8Error;

use bson_wire::ElementType;

use crate::document::RawDocument;
use crate::error::DecodeError;

/// One `(type, name, value)` triple, borrowed from the document buffer.
///
/// `name` is the raw cstring *including* its 0x00 terminator, exactly as
/// it sits on the wire. Use [`key`](Self::key) for the bytes without it.
///
/// `value` is the full value range for the type. Length prefixes are part
/// of it: a string value starts with its int32 length, an embedded
/// document with its own total length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    pub element_type: ElementType,
    pub name: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Element<'a> {
    /// The raw tag byte of the element type.
    #[must_use]
    pub fn tag(&self) -> u8 {
        self.element_type.tag()
    }

    /// The element name without its terminator.
    #[must_use]
    pub fn key(&self) -> &'a [u8] {
        self.name.strip_suffix(&[0x00]).unwrap_or(self.name)
    }

    /// The element name as `&str`.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the name bytes are not valid UTF-8.
    pub fn key_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.key())
    }

    /// View a Document or Array value as a [`RawDocument`].
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NotADocument`] for any other element type.
    /// - [`DecodeError::Wire`] if the embedded frame is malformed.
    pub fn embedded_document(&self) -> Result<RawDocument<'a>, DecodeError> {
        if !self.element_type.is_document() {
            return Err(DecodeError::NotADocument {
                element_type: self.element_type,
            });
        }
        RawDocument::from_bytes(self.value)
    }
}
