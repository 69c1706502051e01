// src/utils/mod.rs
mod string_encoding;
mod endian;

pub use string_encoding::*;
