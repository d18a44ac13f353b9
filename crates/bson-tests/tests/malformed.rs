//! Broken bodies: truncation, bad tags, missing terminators.
//!
//! A reader that gets any of these wrong silently mis-delimits every
//! element after the damage, so each case checks both the reported error
//! and that nothing further is produced.

use bson_decoder::{ElementReader, ElementType, WireError};
use bson_tests::dump;
use bson_tests::fixtures::{self, ALL};
use insta::assert_snapshot;

/// Read until the reader stops; return how many elements came out.
fn drain(reader: &mut ElementReader<'_>) -> usize {
    let mut count = 0;
    while reader.advance() {
        count += 1;
    }
    count
}

// ── Truncation at every byte ─────────────────────────────────────────────────

#[test]
fn every_cut_point_is_clean_or_fails() {
    for fixture in ALL {
        let body = fixture.body();
        for cut in 0..body.len() {
            let mut reader = ElementReader::new(&body[..cut]);
            let count = drain(&mut reader);

            assert!(
                count <= fixture.expected.len(),
                "fixture {} cut {cut}: too many elements",
                fixture.name
            );

            // A clean end is only possible on an element boundary
            match reader.error() {
                None => assert_eq!(
                    reader.position(),
                    cut,
                    "fixture {} cut {cut}: ended early without an error",
                    fixture.name
                ),
                Some(err) => assert!(
                    matches!(
                        err,
                        WireError::TruncatedInput { .. } | WireError::MissingTerminator
                    ),
                    "fixture {} cut {cut}: unexpected {err:?}",
                    fixture.name
                ),
            }
        }
    }
}

#[test]
fn elements_before_the_cut_are_intact() {
    let body = fixtures::EXTENDED_TYPES.body();
    // Cut inside the third element (ObjectId)
    let mut reader = ElementReader::new(body);
    reader.advance();
    reader.advance();
    let cut = reader.position() + 6;

    let mut reader = ElementReader::new(&body[..cut]);
    assert!(reader.advance());
    assert_eq!(reader.current().unwrap().element_type, ElementType::Binary);
    assert!(reader.advance());
    assert_eq!(reader.current().unwrap().element_type, ElementType::Undefined);
    assert!(!reader.advance());
    assert_eq!(
        reader.error(),
        Some(&WireError::TruncatedInput {
            needed: 12,
            available: 1
        })
    );
}

// ── Declared lengths ─────────────────────────────────────────────────────────

#[test]
fn string_longer_than_body() {
    // "s": declared 0x20 bytes, 6 present
    let body = b"\x02s\x00\x20\x00\x00\x00hello\x00";
    let mut reader = ElementReader::new(body);
    assert!(!reader.advance());
    assert_eq!(
        reader.error(),
        Some(&WireError::TruncatedInput {
            needed: 36,
            available: 10
        })
    );
}

#[test]
fn embedded_document_longer_than_body() {
    let mut body = fixtures::EMBEDDED_DOCUMENT.body().to_vec();
    body.truncate(body.len() - 2);

    let mut reader = ElementReader::new(&body);
    assert_eq!(drain(&mut reader), 0);
    assert!(matches!(
        reader.error(),
        Some(WireError::TruncatedInput { needed: 14, .. })
    ));
}

#[test]
fn negative_string_length() {
    let body = b"\x02s\x00\xff\xff\xff\xffabc";
    let mut reader = ElementReader::new(body);
    assert!(!reader.advance());
    assert_eq!(
        reader.error(),
        Some(&WireError::InvalidLength {
            element_type: ElementType::String,
            declared: -1
        })
    );
}

// ── Tags and names ───────────────────────────────────────────────────────────

#[test]
fn unknown_tag_stops_the_reader() {
    let mut body = fixtures::INT32.body().to_vec();
    body.extend_from_slice(b"\x20odd\x00\x01");
    body.extend_from_slice(fixtures::INT32.body());

    let mut reader = ElementReader::new(&body);
    assert_eq!(drain(&mut reader), 1);
    assert_eq!(reader.error(), Some(&WireError::UnknownType { tag: 0x20 }));
    // The int32 after the bad element is never reached
    assert!(!reader.advance());
    assert!(reader.current().is_none());
}

#[test]
fn missing_name_terminator() {
    let mut reader = ElementReader::new(b"\x10intwithoutend");
    assert!(!reader.advance());
    assert_eq!(reader.error(), Some(&WireError::MissingTerminator));
    assert_eq!(reader.position(), 0);
}

#[test]
fn regex_missing_options_terminator() {
    let mut reader = ElementReader::new(b"\x0bre\x00abc\x00i");
    assert!(!reader.advance());
    assert_eq!(reader.error(), Some(&WireError::MissingTerminator));
}

#[test]
fn first_error_wins() {
    // Truncated int32, followed by bytes that would fail differently
    let mut reader = ElementReader::new(b"\x10a\x00\x01\x02");
    assert!(!reader.advance());
    let first = reader.error().cloned();
    assert_eq!(
        first,
        Some(WireError::TruncatedInput {
            needed: 4,
            available: 2
        })
    );
    for _ in 0..5 {
        assert!(!reader.advance());
        assert_eq!(reader.error().cloned(), first);
    }
}

#[test]
fn snapshot_partial_read() {
    let mut body = fixtures::HELLO_WORLD.body().to_vec();
    body.extend_from_slice(b"\x12n\x00\x01\x02");
    assert_snapshot!(dump(&body), @r#"
    0x02 string "hello" [06000000776f726c6400]
    error at 17: truncated input: needed 8 bytes, 2 available
    "#);
}
