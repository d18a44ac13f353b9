//! Shared fixtures and helpers for the integration tests and benches.

pub mod fixtures;

use bson_decoder::ElementReader;
use bson_wire::document_frame::DocumentFrame;

/// A complete encoded document and the top-level elements it holds.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub bytes: &'static [u8],
    pub expected: &'static [Expected],
}

/// One element as the reader must report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expected {
    pub tag: u8,
    /// Raw cstring, terminator included.
    pub name: &'static [u8],
    pub value: &'static [u8],
}

impl Fixture {
    /// The element list, with the 4-byte length and the trailing 0x00 cut off.
    ///
    /// # Panics
    ///
    /// Panics if the fixture is not a well-formed document frame.
    #[must_use]
    pub fn body(&self) -> &'static [u8] {
        let (frame, _) = DocumentFrame::read_from(self.bytes)
            .unwrap_or_else(|e| panic!("fixture {} has a bad frame: {e}", self.name));
        frame.body
    }
}

/// Render a body one element per line: tag, type, key, hex value.
///
/// A failed read ends the dump with an `error at <offset>: ...` line.
#[must_use]
pub fn dump(body: &[u8]) -> String {
    let mut reader = ElementReader::new(body);
    let mut lines = Vec::new();
    while reader.advance() {
        let Some(element) = reader.current() else {
            break;
        };
        lines.push(format!(
            "{:#04x} {} {:?} [{}]",
            element.tag(),
            element.element_type,
            String::from_utf8_lossy(element.key()),
            hex::encode(element.value)
        ));
    }
    if let Some(err) = reader.error() {
        lines.push(format!("error at {}: {err}", reader.position()));
    }
    lines.join("\n")
}
