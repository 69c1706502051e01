// src/utils/string_encoding.rs
use encoding_rs::{mem, UTF_16BE, UTF_16LE, UTF_8};
use tracing::debug;

use crate::error::CodecDirection;
use crate::types::EncodingKind;
use super::endian::pack_utf16_units;

/// Strict decode of `bytes` as `encoding`.
///
/// Malformed input (odd UTF-16 length, lone surrogates, bad UTF-8) yields
/// `None`. The result is cut at the first U+0000.
pub fn decode_text(bytes: &[u8], encoding: EncodingKind) -> Option<String> {
    let decoded = match encoding {
        EncodingKind::Latin1 => Some(mem::decode_latin1(bytes)),
        EncodingKind::Utf16LeBom => UTF_16LE.decode_without_bom_handling_and_without_replacement(bytes),
        EncodingKind::Utf16Be => UTF_16BE.decode_without_bom_handling_and_without_replacement(bytes),
        EncodingKind::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
    };

    let Some(decoded) = decoded else {
        log_codec_failure(encoding, CodecDirection::Decode, bytes.len());
        return None;
    };

    let text: &str = &decoded;
    match text.find('\0') {
        Some(nul) => Some(text[..nul].to_owned()),
        None => Some(text.to_owned()),
    }
}

/// Encode `text` as `encoding` with no BOM and no terminator.
///
/// Only Latin-1 can fail, for characters above U+00FF.
pub fn encode_text(text: &str, encoding: EncodingKind) -> Option<Vec<u8>> {
    if encoding.is_utf16() {
        let units: Vec<u16> = text.encode_utf16().collect();
        return Some(pack_utf16_units(&units, encoding == EncodingKind::Utf16Be));
    }

    if encoding == EncodingKind::Latin1 {
        if !mem::is_str_latin1(text) {
            log_codec_failure(encoding, CodecDirection::Encode, text.len());
            return None;
        }
        return Some(mem::encode_latin1_lossy(text).into_owned());
    }

    Some(text.as_bytes().to_vec())
}

fn log_codec_failure(encoding: EncodingKind, direction: CodecDirection, len: usize) {
    debug!(%encoding, %direction, len, "text codec failure");
}
