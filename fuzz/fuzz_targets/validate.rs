#![no_main]

use bson_decoder::{WalkConfig, validate};
use libfuzzer_sys::fuzz_target;

// Fuzz target: full recursive validation.
//
// Catches bugs in:
// - Embedded documents whose frame disagrees with the element reader
// - Deep nesting (limited to keep stack use bounded)
// - Any panic reachable from untrusted document bytes
fuzz_target!(|data: &[u8]| {
    let config = WalkConfig { max_depth: 32 };
    if let Ok(stats) = validate(data, &config) {
        assert!(stats.max_depth_seen <= config.max_depth);
        assert!(stats.documents >= 1);
    }
});
