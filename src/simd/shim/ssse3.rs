//! SSSE3 intrinsics for the translation shim.
//!
//! First optional family, resolved after the baseline. The byte shuffle is
//! the workhorse here; NEON's table lookup matches its semantics almost
//! directly.

#[cfg(shim_neon)]
use super::types::neon;
use super::types::__m128i;

/// Byte shuffle: each selector lane with the high bit set produces zero,
/// otherwise the low four bits index into `a`.
#[inline]
pub unsafe fn _mm_shuffle_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        // vqtbl1q_u8 zeroes lanes whose index is out of range, so masking
        // the selector to 0x8F sends high-bit lanes past 15 and keeps the
        // low four bits otherwise, which is exactly pshufb.
        __m128i(neon::vqtbl1q_u8(
            a.0,
            neon::vandq_u8(b.0, neon::vdupq_n_u8(0x8F)),
        ))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.shuffle_i8(b.0))
    }
}

/// Concatenates `a` (high) and `b` (low) and extracts 16 bytes starting
/// `IMM8` bytes in. `IMM8` of 32 or more yields zero.
#[inline]
pub unsafe fn _mm_alignr_epi8<const IMM8: i32>(a: __m128i, b: __m128i) -> __m128i {
    __m128i::from_model(a.to_model().alignr_i8(b.to_model(), IMM8.max(0) as usize))
}

/// Lane-wise i8 absolute value; `i8::MIN` wraps to itself.
#[inline]
pub unsafe fn _mm_abs_epi8(a: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        // vabsq (unlike vqabsq) wraps INT8_MIN, matching x86
        __m128i::from_s8(neon::vabsq_s8(a.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.abs_i8())
    }
}

/// Lane-wise i16 absolute value; `i16::MIN` wraps to itself.
#[inline]
pub unsafe fn _mm_abs_epi16(a: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s16(neon::vabsq_s16(a.as_s16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.abs_i16())
    }
}

/// Lane-wise i32 absolute value; `i32::MIN` wraps to itself.
#[inline]
pub unsafe fn _mm_abs_epi32(a: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vabsq_s32(a.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.abs_i32())
    }
}
