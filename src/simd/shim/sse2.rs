//! Baseline (SSE2) integer intrinsics for the translation shim.
//!
//! Every function here carries the exact name and signature of its
//! `core::arch::x86_64` counterpart, so code written against the native
//! intrinsics compiles unchanged. On the NEON backend each operation maps
//! to the equivalent NEON instruction where a direct mapping exists;
//! operations without one (immediate shifts, `_mm_shuffle_epi32`,
//! `_mm_movemask_epi8` aside, scalar moves) go through the reference model
//! in [`crate::portable`]. The portable backend is the reference model
//! throughout.
//!
//! # Safety
//!
//! The functions are `unsafe fn` for the same reasons the native intrinsics
//! are: pointer-taking operations require valid memory, and the signatures
//! must stay interchangeable with `core::arch`.

use crate::portable::V128;

#[cfg(shim_neon)]
use super::types::neon;
use super::types::__m128i;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Returns a zeroed 128-bit vector.
#[inline]
pub unsafe fn _mm_setzero_si128() -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vdupq_n_u8(0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(V128::zero())
    }
}

/// Broadcasts an i8 to all 16 lanes.
#[inline]
pub unsafe fn _mm_set1_epi8(a: i8) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vdupq_n_s8(a))
    }
    #[cfg(shim_portable)]
    {
        __m128i(V128::splat_i8(a))
    }
}

/// Broadcasts an i16 to all 8 lanes.
#[inline]
pub unsafe fn _mm_set1_epi16(a: i16) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vdupq_n_s16(a))
    }
    #[cfg(shim_portable)]
    {
        __m128i(V128::splat_i16(a))
    }
}

/// Broadcasts an i32 to all 4 lanes.
#[inline]
pub unsafe fn _mm_set1_epi32(a: i32) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vdupq_n_s32(a))
    }
    #[cfg(shim_portable)]
    {
        __m128i(V128::splat_i32(a))
    }
}

/// Broadcasts an i64 to both lanes.
#[inline]
pub unsafe fn _mm_set1_epi64x(a: i64) -> __m128i {
    __m128i::from_model(V128::splat_i64(a))
}

/// Builds a vector from four i32 values, highest lane first.
#[inline]
pub unsafe fn _mm_set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> __m128i {
    __m128i::from_model(V128::from_lanes_i32([e0, e1, e2, e3]))
}

/// Builds a vector from two i64 values, highest lane first.
#[inline]
pub unsafe fn _mm_set_epi64x(e1: i64, e0: i64) -> __m128i {
    __m128i::from_model(V128::from_lanes_i64([e0, e1]))
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Loads 128 bits from 16-byte aligned memory.
///
/// # Safety
///
/// `mem_addr` must be valid for 16 bytes of reads and 16-byte aligned.
#[inline]
pub unsafe fn _mm_load_si128(mem_addr: *const __m128i) -> __m128i {
    *mem_addr
}

/// Loads 128 bits from memory with no alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for 16 bytes of reads.
#[inline]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        // NEON loads are unaligned by default
        __m128i(neon::vld1q_u8(mem_addr as *const u8))
    }
    #[cfg(shim_portable)]
    {
        __m128i(V128::from_bytes(
            (mem_addr as *const [u8; 16]).read_unaligned(),
        ))
    }
}

/// Stores 128 bits to 16-byte aligned memory.
///
/// # Safety
///
/// `mem_addr` must be valid for 16 bytes of writes and 16-byte aligned.
#[inline]
pub unsafe fn _mm_store_si128(mem_addr: *mut __m128i, a: __m128i) {
    *mem_addr = a;
}

/// Stores 128 bits to memory with no alignment requirement.
///
/// # Safety
///
/// `mem_addr` must be valid for 16 bytes of writes.
#[inline]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    #[cfg(shim_neon)]
    {
        // NEON stores are unaligned by default
        neon::vst1q_u8(mem_addr as *mut u8, a.0);
    }
    #[cfg(shim_portable)]
    {
        (mem_addr as *mut [u8; 16]).write_unaligned(a.0.to_bytes());
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Lane-wise wrapping i8 addition.
#[inline]
pub unsafe fn _mm_add_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vaddq_s8(a.as_s8(), b.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.add_i8(b.0))
    }
}

/// Lane-wise wrapping i16 addition.
#[inline]
pub unsafe fn _mm_add_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vaddq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.add_i16(b.0))
    }
}

/// Lane-wise wrapping i32 addition.
#[inline]
pub unsafe fn _mm_add_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vaddq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.add_i32(b.0))
    }
}

/// Lane-wise wrapping i64 addition.
#[inline]
pub unsafe fn _mm_add_epi64(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u64(neon::vreinterpretq_u64_s64(neon::vaddq_s64(
            a.as_s64(),
            b.as_s64(),
        )))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.add_i64(b.0))
    }
}

/// Lane-wise wrapping i8 subtraction.
#[inline]
pub unsafe fn _mm_sub_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vsubq_s8(a.as_s8(), b.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.sub_i8(b.0))
    }
}

/// Lane-wise wrapping i16 subtraction.
#[inline]
pub unsafe fn _mm_sub_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vsubq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.sub_i16(b.0))
    }
}

/// Lane-wise wrapping i32 subtraction.
#[inline]
pub unsafe fn _mm_sub_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vsubq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.sub_i32(b.0))
    }
}

/// Lane-wise wrapping i64 subtraction.
#[inline]
pub unsafe fn _mm_sub_epi64(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u64(neon::vreinterpretq_u64_s64(neon::vsubq_s64(
            a.as_s64(),
            b.as_s64(),
        )))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.sub_i64(b.0))
    }
}

/// Lane-wise saturating i16 addition.
#[inline]
pub unsafe fn _mm_adds_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vqaddq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.adds_i16(b.0))
    }
}

/// Lane-wise saturating u8 addition.
#[inline]
pub unsafe fn _mm_adds_epu8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vqaddq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.adds_u8(b.0))
    }
}

/// Lane-wise saturating u16 addition.
#[inline]
pub unsafe fn _mm_adds_epu16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vqaddq_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.adds_u16(b.0))
    }
}

/// Lane-wise saturating i16 subtraction.
#[inline]
pub unsafe fn _mm_subs_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vqsubq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.subs_i16(b.0))
    }
}

/// Lane-wise saturating u8 subtraction.
#[inline]
pub unsafe fn _mm_subs_epu8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vqsubq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.subs_u8(b.0))
    }
}

/// Lane-wise saturating u16 subtraction.
#[inline]
pub unsafe fn _mm_subs_epu16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vqsubq_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.subs_u16(b.0))
    }
}

/// Lane-wise i16 multiplication keeping the low 16 bits of each product.
#[inline]
pub unsafe fn _mm_mullo_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vmulq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.mullo_i16(b.0))
    }
}

// ---------------------------------------------------------------------------
// Logic
// ---------------------------------------------------------------------------

/// Bitwise AND.
#[inline]
pub unsafe fn _mm_and_si128(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vandq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.and(b.0))
    }
}

/// Bitwise OR.
#[inline]
pub unsafe fn _mm_or_si128(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vorrq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.or(b.0))
    }
}

/// Bitwise XOR.
#[inline]
pub unsafe fn _mm_xor_si128(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::veorq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.xor(b.0))
    }
}

/// `(!a) & b`; the first operand is the complemented one.
#[inline]
pub unsafe fn _mm_andnot_si128(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        // vbicq computes first & !second, so the operands swap
        __m128i(neon::vbicq_u8(b.0, a.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.andnot(b.0))
    }
}

// ---------------------------------------------------------------------------
// Comparison: all-ones lanes for true, all-zero lanes for false
// ---------------------------------------------------------------------------

/// Lane-wise i8 equality mask.
#[inline]
pub unsafe fn _mm_cmpeq_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vceqq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpeq_i8(b.0))
    }
}

/// Lane-wise i16 equality mask.
#[inline]
pub unsafe fn _mm_cmpeq_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vceqq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpeq_i16(b.0))
    }
}

/// Lane-wise i32 equality mask.
#[inline]
pub unsafe fn _mm_cmpeq_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vceqq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpeq_i32(b.0))
    }
}

/// Lane-wise signed i8 greater-than mask.
#[inline]
pub unsafe fn _mm_cmpgt_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vcgtq_s8(a.as_s8(), b.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpgt_i8(b.0))
    }
}

/// Lane-wise signed i16 greater-than mask.
#[inline]
pub unsafe fn _mm_cmpgt_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vcgtq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpgt_i16(b.0))
    }
}

/// Lane-wise signed i32 greater-than mask.
#[inline]
pub unsafe fn _mm_cmpgt_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vcgtq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.cmpgt_i32(b.0))
    }
}

// ---------------------------------------------------------------------------
// Min / max
// ---------------------------------------------------------------------------

/// Lane-wise u8 maximum.
#[inline]
pub unsafe fn _mm_max_epu8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vmaxq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_u8(b.0))
    }
}

/// Lane-wise u8 minimum.
#[inline]
pub unsafe fn _mm_min_epu8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vminq_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_u8(b.0))
    }
}

/// Lane-wise i16 maximum.
#[inline]
pub unsafe fn _mm_max_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vmaxq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_i16(b.0))
    }
}

/// Lane-wise i16 minimum.
#[inline]
pub unsafe fn _mm_min_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vminq_s16(a.as_s16(), b.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_i16(b.0))
    }
}

// ---------------------------------------------------------------------------
// Shifts by immediate. x86 defines counts at or past the lane width to
// shift everything out, so these go through the reference model on both
// backends rather than NEON shift intrinsics, whose immediates must stay
// inside the lane width.
// ---------------------------------------------------------------------------

/// Shifts each i16 lane left by `IMM8` bits.
#[inline]
pub unsafe fn _mm_slli_epi16<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shl_i16(IMM8 as u32))
}

/// Shifts each i16 lane right by `IMM8` bits, filling with zeros.
#[inline]
pub unsafe fn _mm_srli_epi16<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shr_i16(IMM8 as u32))
}

/// Shifts each i16 lane right by `IMM8` bits, filling with the sign bit.
#[inline]
pub unsafe fn _mm_srai_epi16<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().sar_i16(IMM8 as u32))
}

/// Shifts each i32 lane left by `IMM8` bits.
#[inline]
pub unsafe fn _mm_slli_epi32<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shl_i32(IMM8 as u32))
}

/// Shifts each i32 lane right by `IMM8` bits, filling with zeros.
#[inline]
pub unsafe fn _mm_srli_epi32<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shr_i32(IMM8 as u32))
}

/// Shifts each i32 lane right by `IMM8` bits, filling with the sign bit.
#[inline]
pub unsafe fn _mm_srai_epi32<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().sar_i32(IMM8 as u32))
}

/// Shifts the whole vector left by `IMM8` bytes; 16 or more yields zero.
#[inline]
pub unsafe fn _mm_slli_si128<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shl_bytes(IMM8.max(0) as usize))
}

/// Shifts the whole vector right by `IMM8` bytes; 16 or more yields zero.
#[inline]
pub unsafe fn _mm_srli_si128<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shr_bytes(IMM8.max(0) as usize))
}

// ---------------------------------------------------------------------------
// Permutes and narrowing
// ---------------------------------------------------------------------------

/// Selects i32 lanes by two-bit indices packed into `IMM8`.
#[inline]
pub unsafe fn _mm_shuffle_epi32<const IMM8: i32>(a: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().shuffle_lanes_i32(IMM8 as u8))
}

/// Interleaves the low 8 byte lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpacklo_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vzip1q_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpacklo_i8(b.0))
    }
}

/// Interleaves the high 8 byte lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpackhi_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vzip2q_u8(a.0, b.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpackhi_i8(b.0))
    }
}

/// Interleaves the low 4 i16 lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpacklo_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vzip1q_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpacklo_i16(b.0))
    }
}

/// Interleaves the high 4 i16 lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpackhi_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vzip2q_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpackhi_i16(b.0))
    }
}

/// Interleaves the low 2 i32 lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpacklo_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vzip1q_u32(a.as_u32(), b.as_u32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpacklo_i32(b.0))
    }
}

/// Interleaves the high 2 i32 lanes of `a` and `b`.
#[inline]
pub unsafe fn _mm_unpackhi_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vzip2q_u32(a.as_u32(), b.as_u32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpackhi_i32(b.0))
    }
}

/// Places the low i64 lane of `a` then of `b`.
#[inline]
pub unsafe fn _mm_unpacklo_epi64(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u64(neon::vzip1q_u64(
            neon::vreinterpretq_u64_u8(a.0),
            neon::vreinterpretq_u64_u8(b.0),
        ))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpacklo_i64(b.0))
    }
}

/// Places the high i64 lane of `a` then of `b`.
#[inline]
pub unsafe fn _mm_unpackhi_epi64(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u64(neon::vzip2q_u64(
            neon::vreinterpretq_u64_u8(a.0),
            neon::vreinterpretq_u64_u8(b.0),
        ))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.unpackhi_i64(b.0))
    }
}

/// Narrows the i16 lanes of `a` then `b` to i8 with signed saturation.
#[inline]
pub unsafe fn _mm_packs_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vcombine_s8(
            neon::vqmovn_s16(a.as_s16()),
            neon::vqmovn_s16(b.as_s16()),
        ))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.packs_i16(b.0))
    }
}

/// Narrows the i16 lanes of `a` then `b` to u8 with unsigned saturation.
#[inline]
pub unsafe fn _mm_packus_epi16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i(neon::vcombine_u8(
            neon::vqmovun_s16(a.as_s16()),
            neon::vqmovun_s16(b.as_s16()),
        ))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.packus_i16(b.0))
    }
}

// ---------------------------------------------------------------------------
// Scalar moves and mask extraction
// ---------------------------------------------------------------------------

/// Collects the sign bit of every byte lane into the low 16 bits.
#[inline]
pub unsafe fn _mm_movemask_epi8(a: __m128i) -> i32 {
    #[cfg(shim_neon)]
    {
        // Classic NEON emulation: shift each byte's sign bit to bit 0, then
        // fold pairs of lanes together with accumulating shifts until the
        // 16 sign bits sit in two bytes of the vector.
        let high_bits = neon::vreinterpretq_u16_u8(neon::vshrq_n_u8::<7>(a.0));
        let paired16 = neon::vreinterpretq_u32_u16(neon::vsraq_n_u16::<7>(high_bits, high_bits));
        let paired32 = neon::vreinterpretq_u64_u32(neon::vsraq_n_u32::<14>(paired16, paired16));
        let paired64 = neon::vreinterpretq_u8_u64(neon::vsraq_n_u64::<28>(paired32, paired32));
        i32::from(neon::vgetq_lane_u8::<0>(paired64))
            | (i32::from(neon::vgetq_lane_u8::<8>(paired64)) << 8)
    }
    #[cfg(shim_portable)]
    {
        a.0.movemask_i8()
    }
}

/// Zero-extends `a` into lane 0.
#[inline]
pub unsafe fn _mm_cvtsi32_si128(a: i32) -> __m128i {
    __m128i::from_model(V128::from_i32_low(a))
}

/// Returns lane 0 as an i32.
#[inline]
pub unsafe fn _mm_cvtsi128_si32(a: __m128i) -> i32 {
    #[cfg(shim_neon)]
    {
        neon::vgetq_lane_s32::<0>(a.as_s32())
    }
    #[cfg(shim_portable)]
    {
        a.0.to_i32_low()
    }
}

/// Zero-extends `a` into lane 0.
#[inline]
pub unsafe fn _mm_cvtsi64_si128(a: i64) -> __m128i {
    __m128i::from_model(V128::from_i64_low(a))
}

/// Returns lane 0 as an i64.
#[inline]
pub unsafe fn _mm_cvtsi128_si64(a: __m128i) -> i64 {
    #[cfg(shim_neon)]
    {
        neon::vgetq_lane_s64::<0>(a.as_s64())
    }
    #[cfg(shim_portable)]
    {
        a.0.to_i64_low()
    }
}
