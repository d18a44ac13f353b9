use std::iter::FusedIterator;

use bson_wire::document_frame::DOCUMENT_TERMINATOR;
use bson_wire::{ElementType, WireError, read_cstring, value_len};

use crate::element::Element;

/// Lifecycle of an [`ElementReader`].
///
/// ```text
///   Ready ──advance──▶ Ready          (element produced)
///     │
///     ├──────────────▶ Exhausted      (body consumed)
///     └──────────────▶ Failed(err)    (first error, kept forever)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
enum ReaderState {
    Ready,
    Exhausted,
    Failed(WireError),
}

/// Pull-based cursor over the elements of a document body.
///
/// The body is the element list only: the caller strips the 4-byte
/// length prefix and the trailing terminator (see
/// [`RawDocument`](crate::RawDocument) for a reader over a whole
/// document). A single 0x00 left as the very last byte is tolerated and
/// treated as that terminator.
///
/// Each step reads one tag byte, one cstring name, and a value whose
/// length comes from the type's rule. Nothing is copied: every
/// [`Element`] borrows from the body.
///
/// Errors are sticky. The first failure is kept and every later step
/// reports "no more elements", so after the loop ends the caller checks
/// [`error`](Self::error) to tell a clean end from a broken document.
///
/// # Usage pattern
///
/// ```text
///   let mut reader = ElementReader::new(body);
///   while reader.advance() {
///       let element = reader.current().unwrap();
///       match element.element_type { ... }
///   }
///   if let Some(err) = reader.error() { /* abort the document */ }
/// ```
pub struct ElementReader<'a> {
    buf: &'a [u8],
    pos: usize,
    state: ReaderState,
    current: Option<Element<'a>>,
}

impl<'a> ElementReader<'a> {
    #[must_use]
    pub fn new(body: &'a [u8]) -> Self {
        let state = if body.is_empty() {
            ReaderState::Exhausted
        } else {
            ReaderState::Ready
        };
        Self {
            buf: body,
            pos: 0,
            state,
            current: None,
        }
    }

    /// Step to the next element.
    ///
    /// Returns `true` if an element was produced (see
    /// [`current`](Self::current)), `false` at the end of the body or
    /// once the reader has failed.
    pub fn advance(&mut self) -> bool {
        self.current = self.next_element().ok().flatten();
        self.current.is_some()
    }

    /// The element produced by the last successful [`advance`](Self::advance).
    ///
    /// `None` before the first advance and after an advance that
    /// returned `false`.
    #[must_use]
    pub fn current(&self) -> Option<Element<'a>> {
        self.current
    }

    /// The error that stopped the reader, if any.
    #[must_use]
    pub fn error(&self) -> Option<&WireError> {
        match &self.state {
            ReaderState::Failed(err) => Some(err),
            ReaderState::Ready | ReaderState::Exhausted => None,
        }
    }

    /// Read the next element.
    ///
    /// Returns `Ok(Some(element))` for each element, `Ok(None)` at the
    /// end of the body, and `Err` exactly once, on the step that fails.
    /// Every call after the end or after a failure returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`WireError::MissingTerminator`] if the name (or a regex part)
    ///   is not null-terminated.
    /// - [`WireError::UnknownType`] if the tag is not a known type.
    /// - [`WireError::InvalidLength`] if a length prefix is unusable.
    /// - [`WireError::TruncatedInput`] if the value runs past the body.
    pub fn next_element(&mut self) -> Result<Option<Element<'a>>, WireError> {
        if self.state != ReaderState::Ready {
            return Ok(None);
        }

        match self.read_element() {
            Ok(Some(element)) => {
                tracing::trace!(
                    offset = self.pos,
                    element_type = %element.element_type,
                    value_len = element.value.len(),
                    "element"
                );
                self.pos += 1 + element.name.len() + element.value.len();
                Ok(Some(element))
            }
            Ok(None) => {
                self.state = ReaderState::Exhausted;
                Ok(None)
            }
            Err(err) => {
                tracing::debug!(offset = self.pos, error = %err, "element reader failed");
                self.state = ReaderState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Delimit the element at `pos` without moving the cursor.
    fn read_element(&self) -> Result<Option<Element<'a>>, WireError> {
        let remaining = &self.buf[self.pos..];
        let Some((&tag, after_tag)) = remaining.split_first() else {
            return Ok(None);
        };

        if tag == DOCUMENT_TERMINATOR && after_tag.is_empty() {
            return Ok(None);
        }

        let (name, after_name) = read_cstring(after_tag)?;
        let element_type = ElementType::from_tag(tag)?;
        let len = value_len(element_type, after_name)?;

        if len > after_name.len() {
            return Err(WireError::TruncatedInput {
                needed: len,
                available: after_name.len(),
            });
        }

        Ok(Some(Element {
            element_type,
            name,
            value: &after_name[..len],
        }))
    }

    /// Bytes consumed so far. After a failure this is the offset of the
    /// element that could not be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread part of the body.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl<'a> Iterator for ElementReader<'a> {
    type Item = Result<Element<'a>, WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}

impl FusedIterator for ElementReader<'_> {}
