#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: read_cstring split point.
//
// On success the string ends in the first 0x00 of the input and the two
// halves put back together are the input.
fuzz_target!(|data: &[u8]| {
    match bson_wire::read_cstring(data) {
        Ok((s, rest)) => {
            assert_eq!(s.last(), Some(&0x00));
            assert!(!s[..s.len() - 1].contains(&0x00));
            assert_eq!(s.len() + rest.len(), data.len());
        }
        Err(_) => assert!(!data.contains(&0x00)),
    }
});
