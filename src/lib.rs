// src/lib.rs
//! # id3-text
//!
//! Text values for ID3v2 tag frames. A frame stores text as an encoding
//! indicator byte followed by the encoded bytes, optionally wrapped in a
//! byte-order mark and a zero terminator. This crate converts between those
//! bytes and Rust strings.
//!
//! ## Supported Encodings
//!
//! | indicator | encoding | BOM | terminator |
//! |---|---|---|---|
//! | 0 | ISO-8859-1 | none | `00` |
//! | 1 | UTF-16LE | `FF FE` | `00 00` |
//! | 2 | UTF-16BE | `FE FF` | `00 00` |
//! | 3 | UTF-8 | none | `00` |
//!
//! ## Quick Start
//!
//! ### Reading Text From a Frame
//!
//! ```rust
//! use id3_text::*;
//!
//! fn main() -> Result<()> {
//!     // indicator byte and payload as a frame reader hands them over
//!     let indicator = 1u8;
//!     let raw = vec![0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00, 0x00, 0x00];
//!
//!     let text = EncodedText::from_tagged(indicator, raw)?;
//!     assert_eq!(text.encoding(), EncodingKind::Utf16LeBom);
//!     assert_eq!(text.try_decode()?, "AB");
//!     Ok(())
//! }
//! ```
//!
//! ### Writing Text Into a Frame
//!
//! ```rust
//! use id3_text::*;
//!
//! fn main() -> Result<()> {
//!     let text = EncodedText::try_from_str_in(EncodingKind::Utf16Be, "Intro")?;
//!
//!     let bytes = text.to_bytes_with(SerializeOptions::framed());
//!     assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
//!     assert_eq!(&bytes[bytes.len() - 2..], &[0x00, 0x00]);
//!     Ok(())
//! }
//! ```
//!
//! ### Detecting the Encoding
//!
//! ```rust
//! use id3_text::*;
//!
//! let text = EncodedText::detect(vec![0xEF, 0xBB, 0xBF, b'o', b'k']);
//! assert_eq!(text.encoding(), EncodingKind::Utf8);
//! assert_eq!(text.to_string(), "ok");
//! ```

// Modules
pub mod error;
pub mod types;
pub mod text;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{TextError, CodecDirection, Result};

pub use types::EncodingKind;

pub use text::{
    EncodedText,
    SerializeOptions,
};

pub use utils::{decode_text, encode_text};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use id3_text::prelude::*;
    //! ```

    pub use crate::error::{TextError, Result};
    pub use crate::types::EncodingKind;
    pub use crate::text::{EncodedText, SerializeOptions};
}

/// Number of text encodings an ID3v2.4 frame can declare
pub const ID3V2_TEXT_ENCODING_COUNT: usize = 4;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");


// Benchmark helpers (only compiled for benchmarks)
#[cfg(feature = "bench")]
pub mod bench_helpers {
    use super::*;

    /// A framed payload of `chars` repetitions of a mixed-script sample
    pub fn framed_sample(encoding: EncodingKind, chars: usize) -> Vec<u8> {
        let sample: String = "Ab1é".chars().cycle().take(chars).collect();
        let text = EncodedText::from_str_in(encoding, &sample).unwrap_or_else(|| {
            EncodedText::new(encoding, Vec::new())
        });
        text.to_bytes_with_bom_and_terminator().to_vec()
    }
}
