//! SSE4.1 intrinsics for the translation shim.
//!
//! Second optional family, resolved after SSSE3. Rounds out the min/max
//! matrix, adds the mask-driven byte blend and the vector test predicates.

#[cfg(shim_neon)]
use super::types::neon;
use super::types::__m128i;

/// Selects bytes from `b` where the mask byte's high bit is set, otherwise
/// from `a`.
#[inline]
pub unsafe fn _mm_blendv_epi8(a: __m128i, b: __m128i, mask: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        // blendv keys on the mask byte's MSB while vbslq keys on every
        // bit, so the sign bit is first spread across its byte with an
        // arithmetic shift.
        let spread = neon::vreinterpretq_u8_s8(neon::vshrq_n_s8::<7>(mask.as_s8()));
        __m128i(neon::vbslq_u8(spread, b.0, a.0))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.blendv_i8(b.0, mask.0))
    }
}

/// Lane-wise i8 minimum.
#[inline]
pub unsafe fn _mm_min_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vminq_s8(a.as_s8(), b.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_i8(b.0))
    }
}

/// Lane-wise i8 maximum.
#[inline]
pub unsafe fn _mm_max_epi8(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s8(neon::vmaxq_s8(a.as_s8(), b.as_s8()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_i8(b.0))
    }
}

/// Lane-wise u16 minimum.
#[inline]
pub unsafe fn _mm_min_epu16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vminq_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_u16(b.0))
    }
}

/// Lane-wise u16 maximum.
#[inline]
pub unsafe fn _mm_max_epu16(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u16(neon::vmaxq_u16(a.as_u16(), b.as_u16()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_u16(b.0))
    }
}

/// Lane-wise i32 minimum.
#[inline]
pub unsafe fn _mm_min_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vminq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_i32(b.0))
    }
}

/// Lane-wise i32 maximum.
#[inline]
pub unsafe fn _mm_max_epi32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_s32(neon::vmaxq_s32(a.as_s32(), b.as_s32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_i32(b.0))
    }
}

/// Lane-wise u32 minimum.
#[inline]
pub unsafe fn _mm_min_epu32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vminq_u32(a.as_u32(), b.as_u32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.min_u32(b.0))
    }
}

/// Lane-wise u32 maximum.
#[inline]
pub unsafe fn _mm_max_epu32(a: __m128i, b: __m128i) -> __m128i {
    #[cfg(shim_neon)]
    {
        __m128i::from_u32(neon::vmaxq_u32(a.as_u32(), b.as_u32()))
    }
    #[cfg(shim_portable)]
    {
        __m128i(a.0.max_u32(b.0))
    }
}

/// Returns 1 when `a & b` is all zero, 0 otherwise.
#[inline]
pub unsafe fn _mm_testz_si128(a: __m128i, b: __m128i) -> i32 {
    #[cfg(shim_neon)]
    {
        i32::from(neon::vmaxvq_u8(neon::vandq_u8(a.0, b.0)) == 0)
    }
    #[cfg(shim_portable)]
    {
        a.0.testz(b.0)
    }
}

/// Returns 1 when `a & mask` is all zero, 0 otherwise.
#[inline]
pub unsafe fn _mm_test_all_zeros(mask: __m128i, a: __m128i) -> i32 {
    _mm_testz_si128(mask, a)
}

/// Returns 1 when every bit of `a` is set, 0 otherwise.
#[inline]
pub unsafe fn _mm_test_all_ones(a: __m128i) -> i32 {
    #[cfg(shim_neon)]
    {
        i32::from(neon::vminvq_u8(a.0) == 0xFF)
    }
    #[cfg(shim_portable)]
    {
        a.0.test_all_ones()
    }
}

/// Zero-extends byte lane `IMM8` to an i32.
#[inline]
pub unsafe fn _mm_extract_epi8<const IMM8: i32>(a: __m128i) -> i32 {
    a.to_model().extract_u8(IMM8 as usize)
}

/// Extracts i32 lane `IMM8`.
#[inline]
pub unsafe fn _mm_extract_epi32<const IMM8: i32>(a: __m128i) -> i32 {
    a.to_model().extract_i32(IMM8 as usize)
}
