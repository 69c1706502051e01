// src/text/normalize.rs
use bytes::Bytes;
use tracing::trace;

use crate::types::EncodingKind;

/// Drop a leading byte-order mark and up to two trailing zero bytes.
///
/// The BOM check looks at content only, so a UTF-16 mark is removed even from
/// a buffer declared as Latin-1. Trailing zeros are removed one at a time and
/// only while the remaining payload is longer than the offset being checked,
/// so a buffer is never reduced to nothing by this rule.
pub(crate) fn strip_bom_and_terminator(bytes: Bytes) -> Bytes {
    let len = bytes.len();
    let leading = EncodingKind::leading_bom_len(&bytes);

    let mut trailing = 0;
    for i in 1..=2 {
        if len - leading - trailing > i && bytes[len - i] == 0 {
            trailing += 1;
        } else {
            break;
        }
    }

    if leading + trailing == 0 {
        return bytes;
    }

    trace!(leading, trailing, len, "stripped BOM/terminator");
    bytes.slice(leading..len - trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(raw: &[u8]) -> Vec<u8> {
        strip_bom_and_terminator(Bytes::copy_from_slice(raw)).to_vec()
    }

    #[test]
    fn test_untouched_buffer_is_not_copied() {
        let raw = Bytes::from(vec![0x41, 0x42]);
        let ptr = raw.as_ptr();
        let stripped = strip_bom_and_terminator(raw);
        assert_eq!(stripped.as_ptr(), ptr);
    }

    #[test]
    fn test_strip_utf16_bom_and_terminator() {
        assert_eq!(strip(&[0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00, 0x00, 0x00]), vec![0x41, 0x00, 0x42, 0x00]);
        assert_eq!(strip(&[0xFE, 0xFF, 0x00, 0x41, 0x00, 0x00]), vec![0x00, 0x41]);
    }

    #[test]
    fn test_strip_utf8_bom() {
        assert_eq!(strip(&[0xEF, 0xBB, 0xBF, 0x41, 0x00]), vec![0x41]);
    }

    #[test]
    fn test_single_trailing_zero() {
        assert_eq!(strip(b"AB\0"), b"AB".to_vec());
        assert_eq!(strip(b"AB\0\0"), b"AB".to_vec());
        // at most two zeros go
        assert_eq!(strip(b"AB\0\0\0"), b"AB\0".to_vec());
    }

    #[test]
    fn test_short_buffers() {
        assert_eq!(strip(&[]), Vec::<u8>::new());
        assert_eq!(strip(&[0x00]), vec![0x00]);
        assert_eq!(strip(&[0x00, 0x00]), vec![0x00]);
        assert_eq!(strip(&[0x41, 0x00]), vec![0x41]);
        assert_eq!(strip(&[0xFF, 0xFE]), Vec::<u8>::new());
        assert_eq!(strip(&[0xFF, 0xFE, 0x00]), vec![0x00]);
        assert_eq!(strip(&[0xFF, 0xFE, 0x00, 0x00]), vec![0x00]);
    }

    #[test]
    fn test_bom_stripped_regardless_of_position_zero() {
        // second byte of the trailing pair is non-zero, so only BOM goes
        assert_eq!(strip(&[0xFE, 0xFF, 0x00, 0x41]), vec![0x00, 0x41]);
    }
}
