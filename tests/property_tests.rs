// tests/property_tests.rs
use id3_text::*;
use proptest::prelude::*;

fn any_encoding() -> impl Strategy<Value = EncodingKind> {
    prop::sample::select(EncodingKind::ALL.to_vec())
}

/// Strings with no NUL that every encoding can carry
fn latin1_text() -> impl Strategy<Value = String> {
    prop::collection::vec(1u8..=0xFF, 0..64)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Payloads that a frame would carry: no leading BOM, no trailing zero, and
/// at least one UTF-16 code unit so the terminator is fully removed
fn payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 2..64).prop_filter("normalized payload", |bytes| {
        bytes.last() != Some(&0)
            && !bytes.starts_with(&[0xFF, 0xFE])
            && !bytes.starts_with(&[0xFE, 0xFF])
            && !bytes.starts_with(&[0xEF, 0xBB, 0xBF])
    })
}

proptest! {
    #[test]
    fn codec_roundtrip(text in latin1_text(), encoding in any_encoding()) {
        let bytes = encode_text(&text, encoding).unwrap();
        prop_assert_eq!(decode_text(&bytes, encoding), Some(text));
    }

    #[test]
    fn unicode_roundtrip(text in "[^\\x00]{0,32}") {
        for encoding in [EncodingKind::Utf16LeBom, EncodingKind::Utf16Be, EncodingKind::Utf8] {
            let bytes = encode_text(&text, encoding).unwrap();
            let decoded = decode_text(&bytes, encoding);
            prop_assert_eq!(decoded.as_deref(), Some(text.as_str()));
        }
    }

    #[test]
    fn normalization_is_idempotent(bytes in payload(), encoding in any_encoding()) {
        let plain = EncodedText::new(encoding, bytes.clone());
        prop_assert_eq!(plain.as_bytes(), &bytes[..]);

        let mut framed = encoding.bom().to_vec();
        framed.extend_from_slice(&bytes);
        framed.extend_from_slice(encoding.terminator());
        prop_assert_eq!(&EncodedText::new(encoding, framed), &plain);

        let mut terminated = bytes.clone();
        terminated.extend_from_slice(encoding.terminator());
        prop_assert_eq!(&EncodedText::new(encoding, terminated), &plain);
    }

    #[test]
    fn framed_output_reparses(bytes in payload(), encoding in any_encoding()) {
        let text = EncodedText::new(encoding, bytes);
        let framed = text.to_bytes_with_bom_and_terminator();
        prop_assert_eq!(EncodedText::new(encoding, framed), text);
    }
}
