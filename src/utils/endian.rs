// src/utils/endian.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Serialize UTF-16 code units in the requested byte order
pub fn pack_utf16_units(units: &[u16], big_endian: bool) -> Vec<u8> {
    let mut bytes = vec![0u8; units.len() * 2];
    if big_endian {
        BigEndian::write_u16_into(units, &mut bytes);
    } else {
        LittleEndian::write_u16_into(units, &mut bytes);
    }
    bytes
}
