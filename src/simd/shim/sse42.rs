//! SSE4.2 intrinsics for the translation shim.
//!
//! Last optional family: the 64-bit compare and the CRC-32C accumulation
//! steps. CRC always goes through the bitwise reference implementation;
//! the aarch64 CRC extension is optional hardware and targeting it would
//! reintroduce the feature-detection problem this crate exists to absorb.

use crate::portable::crc32;

#[cfg(shim_neon)]
use super::types::neon;
use super::types::__m128i;

/// Lane-wise signed i64 greater-than mask.
#[inline]
pub unsafe fn _mm_cmpgt_epi64(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u64(neon::vcgtq_s64(a.as_s64(), b.as_s64()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpgt_i64(b.0))
    }
}

/// Folds one byte into a running CRC-32C checksum.
#[inline]
pub unsafe fn _mm_crc32_u8(crc: u32, v: u8) -> u32 {
    crc32::crc32c_u8(crc, v)
}

/// Folds two little-endian bytes into a running CRC-32C checksum.
#[inline]
pub unsafe fn _mm_crc32_u16(crc: u32, v: u16) -> u32 {
    crc32::crc32c_u16(crc, v)
}

/// Folds four little-endian bytes into a running CRC-32C checksum.
#[inline]
pub unsafe fn _mm_crc32_u32(crc: u32, v: u32) -> u32 {
    crc32::crc32c_u32(crc, v)
}

/// Folds eight little-endian bytes into a running CRC-32C checksum; only
/// the low 32 bits of `crc` participate and the result is zero-extended.
#[inline]
pub unsafe fn _mm_crc32_u64(crc: u64, v: u64) -> u64 {
    crc32::crc32c_u64(crc, v)
}
