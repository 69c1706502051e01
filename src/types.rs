// src/types.rs
use std::fmt;

use tracing::debug;

use crate::error::{Result, TextError};

/// ID3v2 text encoding indicator
///
/// The discriminant is the byte that precedes text in a tag frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EncodingKind {
    /// ISO-8859-1, one byte per character
    #[default]
    Latin1 = 0,
    /// UTF-16 little-endian, written with a `FF FE` byte-order mark
    Utf16LeBom = 1,
    /// UTF-16 big-endian, written without a byte-order mark
    Utf16Be = 2,
    /// UTF-8, written without a byte-order mark
    Utf8 = 3,
}

const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

impl EncodingKind {
    /// All encodings in indicator order
    pub const ALL: [EncodingKind; 4] = [
        EncodingKind::Latin1,
        EncodingKind::Utf16LeBom,
        EncodingKind::Utf16Be,
        EncodingKind::Utf8,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EncodingKind::Latin1),
            1 => Some(EncodingKind::Utf16LeBom),
            2 => Some(EncodingKind::Utf16Be),
            3 => Some(EncodingKind::Utf8),
            _ => None,
        }
    }

    /// The indicator byte for this encoding
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Canonical character-set name
    pub fn charset(&self) -> &'static str {
        match self {
            EncodingKind::Latin1 => "ISO-8859-1",
            EncodingKind::Utf16LeBom => "UTF-16LE",
            EncodingKind::Utf16Be => "UTF-16BE",
            EncodingKind::Utf8 => "UTF-8",
        }
    }

    /// Byte-order mark written ahead of the payload when one is requested.
    /// Empty for the single-byte-unit encodings.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            EncodingKind::Latin1 | EncodingKind::Utf8 => &[],
            EncodingKind::Utf16LeBom => &BOM_UTF16_LE,
            EncodingKind::Utf16Be => &BOM_UTF16_BE,
        }
    }

    /// End-of-string marker, one code unit of zeros
    pub fn terminator(&self) -> &'static [u8] {
        match self {
            EncodingKind::Latin1 | EncodingKind::Utf8 => &[0],
            EncodingKind::Utf16LeBom | EncodingKind::Utf16Be => &[0, 0],
        }
    }

    /// Width of one code unit in bytes
    pub fn unit_width(&self) -> usize {
        self.terminator().len()
    }

    pub fn is_utf16(&self) -> bool {
        matches!(self, EncodingKind::Utf16LeBom | EncodingKind::Utf16Be)
    }

    /// Pick an encoding from the leading byte-order mark, falling back to
    /// Latin-1 when there is none.
    pub fn detect(bytes: &[u8]) -> Self {
        let detected = if bytes.starts_with(&BOM_UTF16_LE) {
            EncodingKind::Utf16LeBom
        } else if bytes.starts_with(&BOM_UTF16_BE) {
            EncodingKind::Utf16Be
        } else if bytes.starts_with(&BOM_UTF8) {
            EncodingKind::Utf8
        } else {
            EncodingKind::Latin1
        };
        debug!(encoding = %detected, len = bytes.len(), "detected text encoding from BOM");
        detected
    }

    /// Length of the byte-order mark at the start of `bytes`, whatever the
    /// declared encoding is.
    pub(crate) fn leading_bom_len(bytes: &[u8]) -> usize {
        if bytes.starts_with(&BOM_UTF16_BE) || bytes.starts_with(&BOM_UTF16_LE) {
            BOM_UTF16_LE.len()
        } else if bytes.starts_with(&BOM_UTF8) {
            BOM_UTF8.len()
        } else {
            0
        }
    }
}

impl TryFrom<u8> for EncodingKind {
    type Error = TextError;

    fn try_from(value: u8) -> Result<Self> {
        EncodingKind::from_u8(value).ok_or(TextError::InvalidEncoding(value))
    }
}

impl From<EncodingKind> for u8 {
    fn from(kind: EncodingKind) -> u8 {
        kind.as_u8()
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.charset())
    }
}
