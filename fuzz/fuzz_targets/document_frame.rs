#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: DocumentFrame::read_from frame parsing.
//
// Catches bugs in:
// - Negative and undersized length prefixes
// - Declared lengths past the end of input
// - Terminator checking
fuzz_target!(|data: &[u8]| {
    if let Ok((frame, consumed)) = bson_wire::document_frame::DocumentFrame::read_from(data) {
        assert_eq!(frame.encoded_len(), consumed);
        assert!(consumed <= data.len());
    }
});
