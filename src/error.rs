// src/error.rs
use std::fmt;
use thiserror::Error;

use crate::types::EncodingKind;

/// Which way a codec was running when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecDirection {
    Decode,
    Encode,
}

impl fmt::Display for CodecDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecDirection::Decode => write!(f, "decode"),
            CodecDirection::Encode => write!(f, "encode"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Invalid text encoding {0}")]
    InvalidEncoding(u8),

    #[error("Could not {direction} text as {encoding}")]
    Codec {
        encoding: EncodingKind,
        direction: CodecDirection,
    },
}

impl TextError {
    /// True for data-quality failures (malformed bytes or unrepresentable
    /// characters), false for a bad encoding indicator.
    pub fn is_codec_failure(&self) -> bool {
        matches!(self, TextError::Codec { .. })
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
