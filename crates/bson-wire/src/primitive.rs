use crate::error::WireError;

/// Width of every int32 length prefix in the format.
pub const I32_LEN: usize = 4;

/// Decode a little-endian `i32` from the front of `buf`.
///
/// # Returns
///
/// `(value, rest)` where `rest` is `buf[4..]`. The value is the
/// two's-complement interpretation of the four bytes, so a caller that
/// wants a length has to reject negatives itself.
///
/// | Bytes                     | Value        |
/// |---------------------------|--------------|
/// | `[0x01, 0x01, 0x00, 0x00]`| 257          |
/// | `[0x00, 0x00, 0x00, 0x01]`| 16_777_216   |
/// | `[0xFF, 0xFF, 0xFF, 0xFF]`| -1           |
///
/// # Errors
///
/// [`WireError::TruncatedInput`] if fewer than 4 bytes remain.
pub fn read_i32_le(buf: &[u8]) -> Result<(i32, &[u8]), WireError> {
    let Some((head, rest)) = buf.split_first_chunk::<I32_LEN>() else {
        return Err(WireError::TruncatedInput {
            needed: I32_LEN,
            available: buf.len(),
        });
    };
    Ok((i32::from_le_bytes(*head), rest))
}

/// Read the int32 at the front of `buf` without handing back the rest.
///
/// Self-delimiting values (documents, arrays, code with scope) count
/// their own prefix in their length, so the prefix stays part of the
/// value range.
///
/// # Errors
///
/// [`WireError::TruncatedInput`] if fewer than 4 bytes remain.
pub fn peek_i32_le(buf: &[u8]) -> Result<i32, WireError> {
    read_i32_le(buf).map(|(value, _)| value)
}

/// Split a null-terminated string off the front of `buf`.
///
/// # Returns
///
/// `(token, rest)` where `token` runs up to and *including* the first
/// 0x00 byte, and `rest` is everything after it.
///
/// # Errors
///
/// [`WireError::MissingTerminator`] if `buf` contains no 0x00 byte,
/// which includes the empty buffer.
pub fn read_cstring(buf: &[u8]) -> Result<(&[u8], &[u8]), WireError> {
    let end = buf
        .iter()
        .position(|&b| b == 0x00)
        .ok_or(WireError::MissingTerminator)?;
    Ok(buf.split_at(end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i32_low_bytes() {
        let (value, rest) = read_i32_le(&[0x01, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!(value, 0x101);
        assert!(rest.is_empty());
    }

    #[test]
    fn i32_high_byte() {
        let (value, rest) = read_i32_le(&[0x00, 0x00, 0x00, 0x01]).unwrap();
        assert_eq!(value, 0x0100_0000);
        assert!(rest.is_empty());
    }

    #[test]
    fn i32_leaves_trailing_bytes() {
        let (value, rest) = read_i32_le(&[0x0f; 5]).unwrap();
        assert_eq!(value, 0x0f0f_0f0f);
        assert_eq!(rest, &[0x0f]);
    }

    #[test]
    fn i32_is_sign_extended() {
        let (value, _) = read_i32_le(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(value, -1);

        let (value, _) = read_i32_le(&[0x00, 0x00, 0x00, 0x80]).unwrap();
        assert_eq!(value, i32::MIN);
    }

    #[test]
    fn i32_truncated() {
        assert_eq!(
            read_i32_le(&[0x01, 0x02, 0x03]),
            Err(WireError::TruncatedInput {
                needed: 4,
                available: 3
            })
        );
        assert!(matches!(
            read_i32_le(&[]),
            Err(WireError::TruncatedInput { available: 0, .. })
        ));
    }

    #[test]
    fn peek_matches_read() {
        let buf = [0x0e, 0x00, 0x00, 0x00, 0x10];
        assert_eq!(peek_i32_le(&buf).unwrap(), 14);
    }

    #[test]
    fn cstring_empty_input() {
        assert_eq!(read_cstring(&[]), Err(WireError::MissingTerminator));
    }

    #[test]
    fn cstring_whole_buffer() {
        let (token, rest) = read_cstring(b"bson\0").unwrap();
        assert_eq!(token, b"bson\0");
        assert!(rest.is_empty());
    }

    #[test]
    fn cstring_stops_at_first_terminator() {
        let (token, rest) = read_cstring(b"bson\0\0").unwrap();
        assert_eq!(token, b"bson\0");
        assert_eq!(rest, &[0x00]);
    }

    #[test]
    fn cstring_empty_token() {
        // A bare terminator is a valid, empty cstring
        let (token, rest) = read_cstring(&[0x00, 0x41]).unwrap();
        assert_eq!(token, &[0x00]);
        assert_eq!(rest, b"A");
    }

    #[test]
    fn cstring_without_terminator() {
        assert_eq!(read_cstring(b"bson"), Err(WireError::MissingTerminator));
    }
}
