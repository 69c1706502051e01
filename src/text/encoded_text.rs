// src/text/encoded_text.rs
use bytes::{Bytes, BytesMut};
use std::fmt;
use tracing::warn;

use crate::error::{CodecDirection, Result, TextError};
use crate::types::EncodingKind;
use crate::utils::{decode_text, encode_text};
use super::normalize::strip_bom_and_terminator;
use super::options::SerializeOptions;

/// A text value as stored in a tag frame: an encoding plus its payload bytes.
///
/// A leading byte-order mark and trailing terminator zeros are removed once,
/// when the value is built, and added back on request by
/// [`to_bytes_with`](Self::to_bytes_with).
///
/// Equality compares the encoding and the raw payload, not the decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedText {
    encoding: EncodingKind,
    bytes: Bytes,
}

impl EncodedText {
    /// Wrap raw frame bytes declared as `encoding`
    pub fn new(encoding: EncodingKind, bytes: impl Into<Bytes>) -> Self {
        EncodedText {
            encoding,
            bytes: strip_bom_and_terminator(bytes.into()),
        }
    }

    /// Wrap raw frame bytes using the indicator byte read from the frame
    pub fn from_tagged(tag: u8, bytes: impl Into<Bytes>) -> Result<Self> {
        let encoding = EncodingKind::try_from(tag)?;
        Ok(Self::new(encoding, bytes))
    }

    /// Encode `text` as `encoding`.
    ///
    /// Returns `None` if `text` holds characters the encoding cannot represent.
    ///
    /// The encoded bytes are normalized like any other input, so trailing zero
    /// bytes are dropped here too. In UTF-16 that includes the zero half of a
    /// final code unit such as `A` (`41 00` little-endian).
    pub fn from_str_in(encoding: EncodingKind, text: &str) -> Option<Self> {
        let bytes = encode_text(text, encoding)?;
        Some(Self::new(encoding, bytes))
    }

    pub fn try_from_str_in(encoding: EncodingKind, text: &str) -> Result<Self> {
        Self::from_str_in(encoding, text).ok_or(TextError::Codec {
            encoding,
            direction: CodecDirection::Encode,
        })
    }

    /// Like [`from_str_in`](Self::from_str_in), with the encoding given as a
    /// frame indicator byte. An unknown indicator is an error; an
    /// unrepresentable string is `Ok(None)`.
    pub fn from_tagged_str(tag: u8, text: &str) -> Result<Option<Self>> {
        let encoding = EncodingKind::try_from(tag)?;
        Ok(Self::from_str_in(encoding, text))
    }

    /// Wrap raw bytes, picking the encoding from a leading byte-order mark.
    /// Bytes without a recognised mark are taken as Latin-1.
    pub fn detect(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let encoding = EncodingKind::detect(&bytes);
        Self::new(encoding, bytes)
    }

    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    pub fn charset(&self) -> &'static str {
        self.encoding.charset()
    }

    /// Replace the encoding without touching the payload.
    ///
    /// The bytes are not re-encoded or re-normalized. Only use this when the
    /// existing payload is known to be valid in `encoding`; otherwise later
    /// reads will misinterpret it or fail to decode.
    pub fn set_encoding(&mut self, encoding: EncodingKind) {
        if !self.bytes.is_empty() && self.bytes.len() % encoding.unit_width() != 0 {
            warn!(
                from = %self.encoding,
                to = %encoding,
                len = self.bytes.len(),
                "payload length does not fit new text encoding"
            );
        }
        self.encoding = encoding;
    }

    /// The normalized payload
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn payload(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the payload, cut at the first NUL.
    ///
    /// `None` means the payload is not valid in the current encoding.
    pub fn decode(&self) -> Option<String> {
        decode_text(&self.bytes, self.encoding)
    }

    pub fn try_decode(&self) -> Result<String> {
        self.decode().ok_or(TextError::Codec {
            encoding: self.encoding,
            direction: CodecDirection::Decode,
        })
    }

    /// Serialize for a frame.
    ///
    /// When nothing needs adding, the stored buffer itself is returned.
    pub fn to_bytes_with(&self, options: SerializeOptions) -> Bytes {
        let bom: &[u8] = if options.include_bom { self.encoding.bom() } else { &[] };
        let terminator: &[u8] = if options.include_terminator {
            self.encoding.terminator()
        } else {
            &[]
        };

        if bom.is_empty() && terminator.is_empty() {
            return self.bytes.clone();
        }

        let mut out = BytesMut::with_capacity(bom.len() + self.bytes.len() + terminator.len());
        out.extend_from_slice(bom);
        out.extend_from_slice(&self.bytes);
        out.extend_from_slice(terminator);
        out.freeze()
    }

    pub fn to_bytes(&self) -> Bytes {
        self.to_bytes_with(SerializeOptions::bare())
    }

    pub fn to_bytes_with_bom(&self) -> Bytes {
        self.to_bytes_with(SerializeOptions::with_bom())
    }

    pub fn to_bytes_with_bom_and_terminator(&self) -> Bytes {
        self.to_bytes_with(SerializeOptions::framed())
    }
}

impl fmt::Display for EncodedText {
    /// Writes the decoded text, or nothing if the payload does not decode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl From<Bytes> for EncodedText {
    fn from(bytes: Bytes) -> Self {
        Self::detect(bytes)
    }
}

impl From<Vec<u8>> for EncodedText {
    fn from(bytes: Vec<u8>) -> Self {
        Self::detect(bytes)
    }
}

impl From<&[u8]> for EncodedText {
    fn from(bytes: &[u8]) -> Self {
        Self::detect(Bytes::copy_from_slice(bytes))
    }
}
