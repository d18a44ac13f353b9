#![no_main]

use bson_decoder::ElementReader;
use libfuzzer_sys::fuzz_target;

// Fuzz target: ElementReader over an arbitrary body.
//
// Every produced element lies inside the body, elements tile it from
// offset 0, and a clean stop leaves at most the trailing terminator.
fuzz_target!(|data: &[u8]| {
    let mut reader = ElementReader::new(data);
    let mut consumed = 0;
    while reader.advance() {
        let element = reader.current().unwrap();
        consumed += 1 + element.name.len() + element.value.len();
        assert_eq!(reader.position(), consumed);
        assert!(consumed <= data.len());
    }

    if reader.error().is_none() {
        assert!(reader.remaining().is_empty() || reader.remaining() == [0x00]);
    }
    assert!(!reader.advance());
});
