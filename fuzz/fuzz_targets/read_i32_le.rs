#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: read_i32_le / peek_i32_le agreement.
//
// Catches bugs in:
// - Short input handling (0..=3 bytes)
// - Byte order
fuzz_target!(|data: &[u8]| {
    let read = bson_wire::read_i32_le(data);
    let peeked = bson_wire::peek_i32_le(data);
    match read {
        Ok((value, rest)) => {
            assert_eq!(peeked, Ok(value));
            assert_eq!(rest.len(), data.len() - 4);
            assert_eq!(&value.to_le_bytes(), &data[..4]);
        }
        Err(_) => {
            assert!(data.len() < 4);
            assert!(peeked.is_err());
        }
    }
});
