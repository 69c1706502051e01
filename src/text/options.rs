// src/text/options.rs

/// Controls what [`EncodedText::to_bytes_with`](super::EncodedText::to_bytes_with)
/// wraps around the payload.
///
/// The frame writer decides which of these a frame needs. A BOM request is a
/// no-op for Latin-1 and UTF-8, which have no mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SerializeOptions {
    pub include_bom: bool,
    pub include_terminator: bool,
}

impl SerializeOptions {
    /// Neither BOM nor terminator
    pub const fn new() -> Self {
        SerializeOptions {
            include_bom: false,
            include_terminator: false,
        }
    }

    pub const fn bare() -> Self {
        Self::new()
    }

    pub const fn with_bom() -> Self {
        SerializeOptions {
            include_bom: true,
            include_terminator: false,
        }
    }

    /// BOM and terminator, the shape of a text field inside a frame
    pub const fn framed() -> Self {
        SerializeOptions {
            include_bom: true,
            include_terminator: true,
        }
    }

    pub const fn bom(mut self, include: bool) -> Self {
        self.include_bom = include;
        self
    }

    pub const fn terminator(mut self, include: bool) -> Self {
        self.include_terminator = include;
        self
    }
}
