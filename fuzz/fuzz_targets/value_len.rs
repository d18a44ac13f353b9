#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: resolve_value_len per type tag.
//
// Input format:
//   - First byte: type tag
//   - Remaining bytes: value region
//
// Catches bugs in:
// - Negative and overflowing length prefixes
// - Regex and code-with-scope layouts
// - Lengths that point past the region (must never panic)
fuzz_target!(|data: &[u8]| {
    let Some((&tag, rest)) = data.split_first() else {
        return;
    };
    let _ = bson_wire::resolve_value_len(tag, rest);
});
