//! Bitwise CRC-32C (Castagnoli) reference implementation.
//!
//! Mirrors the SSE4.2 `_mm_crc32_*` accumulation steps: the input value is
//! folded into the running checksum one little-endian byte at a time using
//! the reflected polynomial `0x82F63B78`. The 64-bit step only consumes the
//! low 32 bits of the running checksum and zero-extends the result, exactly
//! as `crc32 r64, r64` does.

const POLY: u32 = 0x82F6_3B78;

/// Folds one byte into the running CRC-32C checksum (`_mm_crc32_u8`).
#[inline]
pub fn crc32c_u8(crc: u32, value: u8) -> u32 {
    let mut crc = crc ^ u32::from(value);
    for _ in 0..8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
    }
    crc
}

/// Folds two little-endian bytes into the checksum (`_mm_crc32_u16`).
#[inline]
pub fn crc32c_u16(crc: u32, value: u16) -> u32 {
    value.to_le_bytes().iter().fold(crc, |crc, &byte| crc32c_u8(crc, byte))
}

/// Folds four little-endian bytes into the checksum (`_mm_crc32_u32`).
#[inline]
pub fn crc32c_u32(crc: u32, value: u32) -> u32 {
    value.to_le_bytes().iter().fold(crc, |crc, &byte| crc32c_u8(crc, byte))
}

/// Folds eight little-endian bytes into the checksum (`_mm_crc32_u64`).
#[inline]
pub fn crc32c_u64(crc: u64, value: u64) -> u64 {
    u64::from(
        value
            .to_le_bytes()
            .iter()
            .fold(crc as u32, |crc, &byte| crc32c_u8(crc, byte)),
    )
}
