//! Whole documents: frame checks, key lookup, and the depth-first walk.

use bson_decoder::{
    DecodeError, ElementType, RawDocument, WalkConfig, WalkEvent, WalkStats, WireError, validate,
    walk,
};
use bson_tests::dump;
use bson_tests::fixtures::{self, ALL};
use insta::assert_snapshot;

// ── Frame ────────────────────────────────────────────────────────────────────

#[test]
fn every_fixture_is_a_document() {
    for fixture in ALL {
        let doc = RawDocument::from_bytes(fixture.bytes)
            .unwrap_or_else(|e| panic!("fixture {}: {e}", fixture.name));
        assert_eq!(doc.len_bytes(), fixture.bytes.len());
        assert_eq!(doc.body(), fixture.body());
    }
}

#[test]
fn trailing_bytes_after_fixture() {
    let mut bytes = fixtures::INT32.bytes.to_vec();
    bytes.push(0x00);
    assert_eq!(
        RawDocument::from_bytes(&bytes),
        Err(DecodeError::TrailingData { extra_bytes: 1 })
    );
}

#[test]
fn fixture_missing_last_byte() {
    let bytes = fixtures::INT32.bytes;
    assert_eq!(
        RawDocument::from_bytes(&bytes[..bytes.len() - 1]),
        Err(DecodeError::Wire(WireError::TruncatedInput {
            needed: 14,
            available: 13
        }))
    );
}

// ── Lookup ───────────────────────────────────────────────────────────────────

#[test]
fn get_finds_every_top_level_name() {
    for fixture in ALL {
        let doc = RawDocument::from_bytes(fixture.bytes).unwrap();
        for expected in fixture.expected {
            let key = &expected.name[..expected.name.len() - 1];
            let element = doc
                .get(key)
                .unwrap()
                .unwrap_or_else(|| panic!("fixture {}: {key:?} not found", fixture.name));
            assert_eq!(element.value, expected.value);
        }
    }
}

#[test]
fn array_elements_are_keyed_by_index() {
    let doc = RawDocument::from_bytes(fixtures::INT_ARRAY.bytes).unwrap();
    let array = doc.get(b"array[int]").unwrap().unwrap();
    assert_eq!(array.element_type, ElementType::Array);

    let inner = array.embedded_document().unwrap();
    let keys: Vec<_> = inner
        .elements()
        .map(|element| element.unwrap().key_str().unwrap().to_owned())
        .collect();
    assert_eq!(keys, ["0", "1", "2", "3", "4", "5"]);

    let third = inner.get(b"2").unwrap().unwrap();
    assert_eq!(third.value, 3_i32.to_le_bytes());
}

#[test]
fn embedded_document_of_scalar_is_rejected() {
    let doc = RawDocument::from_bytes(fixtures::INT32.bytes).unwrap();
    let element = doc.get(b"int").unwrap().unwrap();
    assert_eq!(
        element.embedded_document(),
        Err(DecodeError::NotADocument {
            element_type: ElementType::Int32
        })
    );
}

// ── Walk ─────────────────────────────────────────────────────────────────────

#[test]
fn every_fixture_validates() {
    for fixture in ALL {
        let stats = validate(fixture.bytes, &WalkConfig::default())
            .unwrap_or_else(|e| panic!("fixture {}: {e}", fixture.name));
        let nested = fixture
            .expected
            .iter()
            .filter(|e| e.tag == 0x03 || e.tag == 0x04)
            .count();
        assert_eq!(stats.documents, 1 + nested, "fixture {}", fixture.name);
        assert!(stats.elements >= fixture.expected.len());
    }
}

#[test]
fn walk_stats_for_arrays() {
    let cases = [
        (fixtures::INT_ARRAY, 7),
        (fixtures::DOUBLE_ARRAY, 3),
        (fixtures::MIXED_ARRAY, 4),
        (fixtures::BOOL_ARRAY, 4),
        (fixtures::STRING_ARRAY, 3),
        (fixtures::EMBEDDED_DOCUMENT, 2),
    ];
    for (fixture, elements) in cases {
        assert_eq!(
            validate(fixture.bytes, &WalkConfig::default()),
            Ok(WalkStats {
                elements,
                documents: 2,
                max_depth_seen: 1
            }),
            "fixture {}",
            fixture.name
        );
    }
}

#[test]
fn code_with_scope_is_not_descended() {
    let stats = validate(fixtures::EXTENDED_TYPES.bytes, &WalkConfig::default()).unwrap();
    assert_eq!(stats.documents, 1);
    assert_eq!(stats.elements, fixtures::EXTENDED_TYPES.expected.len());
}

#[test]
fn walk_reports_nested_keys_in_order() {
    let doc = RawDocument::from_bytes(fixtures::MIXED_ARRAY.bytes).unwrap();
    let mut seen = Vec::new();
    walk(doc, &WalkConfig::default(), |event| {
        if let WalkEvent::Element { depth, element } = event {
            seen.push((depth, element.element_type, element.key_str().unwrap()));
        }
    })
    .unwrap();

    assert_eq!(
        seen,
        [
            (0, ElementType::Array, "BSON"),
            (1, ElementType::String, "0"),
            (1, ElementType::Double, "1"),
            (1, ElementType::Int32, "2"),
        ]
    );
}

#[test]
fn depth_zero_rejects_any_nesting() {
    let config = WalkConfig { max_depth: 0 };
    assert!(validate(fixtures::HELLO_WORLD.bytes, &config).is_ok());
    assert_eq!(
        validate(fixtures::EMBEDDED_DOCUMENT.bytes, &config),
        Err(DecodeError::DepthLimitExceeded { limit: 0 })
    );
}

#[test]
fn walk_stops_at_broken_array() {
    // Shrink the inner array's declared length so its terminator is a
    // value byte instead.
    let mut bytes = fixtures::BOOL_ARRAY.bytes.to_vec();
    bytes[17] -= 1;
    assert_eq!(
        validate(&bytes, &WalkConfig::default()),
        Err(DecodeError::Element {
            offset: 0,
            depth: 0,
            source: WireError::BadDocumentTerminator { found: 0x01 }
        })
    );
}

// ── Snapshots ────────────────────────────────────────────────────────────────

#[test]
fn snapshot_mixed_array_contents() {
    let doc = RawDocument::from_bytes(fixtures::MIXED_ARRAY.bytes).unwrap();
    let inner = doc.get(b"BSON").unwrap().unwrap().embedded_document().unwrap();
    assert_snapshot!(dump(inner.body()), @r#"
    0x02 string "0" [08000000617765736f6d6500]
    0x01 double "1" [3333333333331440]
    0x10 int "2" [c2070000]
    "#);
}

#[test]
fn snapshot_string_array_contents() {
    let doc = RawDocument::from_bytes(fixtures::STRING_ARRAY.bytes).unwrap();
    let inner = doc
        .get(b"array[string]")
        .unwrap()
        .unwrap()
        .embedded_document()
        .unwrap();
    assert_snapshot!(dump(inner.body()), @r#"
    0x02 string "0" [0600000068656c6c6f00]
    0x02 string "1" [06000000776f726c6400]
    "#);
}
