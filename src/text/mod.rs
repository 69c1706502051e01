// src/text/mod.rs
//! Encoded text values
//!
//! - [`EncodedText`] - an encoding plus a normalized payload, convertible to a
//!   `String` and back to frame bytes
//! - [`SerializeOptions`] - whether a BOM and/or terminator is written
//!
//! # Examples
//!
//! ```
//! use id3_text::text::{EncodedText, SerializeOptions};
//! use id3_text::types::EncodingKind;
//!
//! let raw = vec![0xFF, 0xFE, b'h', 0x00, b'i', 0x00, 0x00, 0x00];
//! let text = EncodedText::from_tagged(1, raw.clone()).unwrap();
//!
//! assert_eq!(text.decode().as_deref(), Some("hi"));
//! assert_eq!(text.to_bytes_with(SerializeOptions::framed()).to_vec(), raw);
//!
//! let title = EncodedText::from_str_in(EncodingKind::Latin1, "Café").unwrap();
//! assert_eq!(title.as_bytes(), b"Caf\xE9");
//! ```

mod encoded_text;
mod normalize;
mod options;

pub use encoded_text::EncodedText;
pub use options::SerializeOptions;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EncodingKind;

    #[test]
    fn test_string_roundtrip() {
        for encoding in [EncodingKind::Latin1, EncodingKind::Utf16Be, EncodingKind::Utf8] {
            let text = EncodedText::from_str_in(encoding, "Track 01 - Intro").unwrap();
            assert_eq!(text.decode().as_deref(), Some("Track 01 - Intro"), "{}", encoding);
        }

        let text = EncodedText::from_str_in(EncodingKind::Utf16LeBom, "Track 01 - Intro").unwrap();
        assert_eq!(text.decode(), None);
    }

    #[test]
    fn test_framed_bytes_reparse_to_same_value() {
        for encoding in EncodingKind::ALL {
            let text = EncodedText::from_str_in(encoding, "Ünïcödé").unwrap();
            let framed = text.to_bytes_with_bom_and_terminator();
            assert_eq!(EncodedText::new(encoding, framed), text);
        }
    }

    #[test]
    fn test_empty_value() {
        let text = EncodedText::new(EncodingKind::Utf16LeBom, Vec::new());
        assert!(text.is_empty());
        assert_eq!(text.decode().as_deref(), Some(""));
        assert_eq!(text.to_bytes_with_bom_and_terminator().to_vec(), vec![0xFF, 0xFE, 0x00, 0x00]);
    }
}
