//! Lane-wise reference implementation of a 128-bit integer vector.
//!
//! [`V128`] stores 16 bytes in memory order (lane 0 first) and implements
//! the full baseline and optional operation set of this crate as ordinary
//! safe Rust. Every method mirrors one x86 intrinsic; the mapping is noted
//! on each method. Performance is irrelevant here: correctness and
//! readability are the point, the vector backends exist for speed.

/// A 128-bit vector value, stored as 16 bytes in memory (lane) order.
///
/// Lane `i` of an N-bit element view occupies bytes `[i * N/8, (i+1) * N/8)`
/// interpreted little-endian, matching how x86 vectors are laid out in
/// memory. The alignment matches `__m128i` so the type can back the shim's
/// vector type directly.
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct V128(pub(crate) [u8; 16]);

impl core::fmt::Debug for V128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "V128({:?})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Lane views. All conversions go through little-endian byte encoding so the
// model behaves identically on any host, including big-endian ones.
// ---------------------------------------------------------------------------

macro_rules! lane_views {
    ($to:ident, $from:ident, $t:ty, $n:expr) => {
        #[inline]
        pub(crate) fn $to(self) -> [$t; $n] {
            let mut lanes = [0 as $t; $n];
            for (lane, chunk) in lanes
                .iter_mut()
                .zip(self.0.chunks_exact(core::mem::size_of::<$t>()))
            {
                *lane = <$t>::from_le_bytes(chunk.try_into().unwrap());
            }
            lanes
        }

        #[inline]
        pub(crate) fn $from(lanes: [$t; $n]) -> Self {
            let mut bytes = [0u8; 16];
            for (lane, chunk) in lanes
                .iter()
                .zip(bytes.chunks_exact_mut(core::mem::size_of::<$t>()))
            {
                chunk.copy_from_slice(&lane.to_le_bytes());
            }
            Self(bytes)
        }
    };
}

impl V128 {
    lane_views!(i8x16, from_i8x16, i8, 16);
    lane_views!(u8x16, from_u8x16, u8, 16);
    lane_views!(i16x8, from_i16x8, i16, 8);
    lane_views!(u16x8, from_u16x8, u16, 8);
    lane_views!(i32x4, from_i32x4, i32, 4);
    lane_views!(u32x4, from_u32x4, u32, 4);
    lane_views!(i64x2, from_i64x2, i64, 2);
    lane_views!(u64x2, from_u64x2, u64, 2);
}

// ---------------------------------------------------------------------------
// Lane-wise combinators
// ---------------------------------------------------------------------------

macro_rules! zip_lanes {
    ($name:ident, $to:ident, $from:ident, $t:ty, $n:expr) => {
        #[inline]
        fn $name(self, rhs: Self, op: impl Fn($t, $t) -> $t) -> Self {
            let (a, b) = (self.$to(), rhs.$to());
            let mut out = [0 as $t; $n];
            for i in 0..$n {
                out[i] = op(a[i], b[i]);
            }
            Self::$from(out)
        }
    };
}

impl V128 {
    zip_lanes!(zip_i8, i8x16, from_i8x16, i8, 16);
    zip_lanes!(zip_u8, u8x16, from_u8x16, u8, 16);
    zip_lanes!(zip_i16, i16x8, from_i16x8, i16, 8);
    zip_lanes!(zip_u16, u16x8, from_u16x8, u16, 8);
    zip_lanes!(zip_i32, i32x4, from_i32x4, i32, 4);
    zip_lanes!(zip_i64, i64x2, from_i64x2, i64, 2);
    zip_lanes!(zip_u32, u32x4, from_u32x4, u32, 4);
}

// ---------------------------------------------------------------------------
// Construction and memory
// ---------------------------------------------------------------------------

impl V128 {
    /// All-zero vector (`_mm_setzero_si128`).
    #[inline]
    pub const fn zero() -> Self {
        Self([0u8; 16])
    }

    /// Builds a vector from 16 bytes in memory order (`_mm_loadu_si128`).
    #[inline]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16 bytes in memory order (`_mm_storeu_si128`).
    #[inline]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Broadcasts one i8 to all lanes (`_mm_set1_epi8`).
    #[inline]
    pub fn splat_i8(value: i8) -> Self {
        Self([value as u8; 16])
    }

    /// Broadcasts one i16 to all lanes (`_mm_set1_epi16`).
    #[inline]
    pub fn splat_i16(value: i16) -> Self {
        Self::from_i16x8([value; 8])
    }

    /// Broadcasts one i32 to all lanes (`_mm_set1_epi32`).
    #[inline]
    pub fn splat_i32(value: i32) -> Self {
        Self::from_i32x4([value; 4])
    }

    /// Broadcasts one i64 to both lanes (`_mm_set1_epi64x`).
    #[inline]
    pub fn splat_i64(value: i64) -> Self {
        Self::from_i64x2([value; 2])
    }

    /// Builds a vector from four i32 lanes, lane 0 first (`_mm_set_epi32`
    /// takes its arguments highest lane first; this takes memory order).
    #[inline]
    pub fn from_lanes_i32(lanes: [i32; 4]) -> Self {
        Self::from_i32x4(lanes)
    }

    /// Builds a vector from two i64 lanes, lane 0 first (`_mm_set_epi64x`
    /// takes its arguments highest lane first; this takes memory order).
    #[inline]
    pub fn from_lanes_i64(lanes: [i64; 2]) -> Self {
        Self::from_i64x2(lanes)
    }

    /// Zero-extends one i32 into lane 0 (`_mm_cvtsi32_si128`).
    #[inline]
    pub fn from_i32_low(value: i32) -> Self {
        Self::from_i32x4([value, 0, 0, 0])
    }

    /// Returns lane 0 as i32 (`_mm_cvtsi128_si32`).
    #[inline]
    pub fn to_i32_low(self) -> i32 {
        self.i32x4()[0]
    }

    /// Zero-extends one i64 into lane 0 (`_mm_cvtsi64_si128`).
    #[inline]
    pub fn from_i64_low(value: i64) -> Self {
        Self::from_i64x2([value, 0])
    }

    /// Returns lane 0 as i64 (`_mm_cvtsi128_si64`).
    #[inline]
    pub fn to_i64_low(self) -> i64 {
        self.i64x2()[0]
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

impl V128 {
    /// Lane-wise wrapping i8 addition (`_mm_add_epi8`).
    #[inline]
    pub fn add_i8(self, rhs: Self) -> Self {
        self.zip_i8(rhs, i8::wrapping_add)
    }

    /// Lane-wise wrapping i16 addition (`_mm_add_epi16`).
    #[inline]
    pub fn add_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::wrapping_add)
    }

    /// Lane-wise wrapping i32 addition (`_mm_add_epi32`).
    #[inline]
    pub fn add_i32(self, rhs: Self) -> Self {
        self.zip_i32(rhs, i32::wrapping_add)
    }

    /// Lane-wise wrapping i64 addition (`_mm_add_epi64`).
    #[inline]
    pub fn add_i64(self, rhs: Self) -> Self {
        self.zip_i64(rhs, i64::wrapping_add)
    }

    /// Lane-wise wrapping i8 subtraction (`_mm_sub_epi8`).
    #[inline]
    pub fn sub_i8(self, rhs: Self) -> Self {
        self.zip_i8(rhs, i8::wrapping_sub)
    }

    /// Lane-wise wrapping i16 subtraction (`_mm_sub_epi16`).
    #[inline]
    pub fn sub_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::wrapping_sub)
    }

    /// Lane-wise wrapping i32 subtraction (`_mm_sub_epi32`).
    #[inline]
    pub fn sub_i32(self, rhs: Self) -> Self {
        self.zip_i32(rhs, i32::wrapping_sub)
    }

    /// Lane-wise wrapping i64 subtraction (`_mm_sub_epi64`).
    #[inline]
    pub fn sub_i64(self, rhs: Self) -> Self {
        self.zip_i64(rhs, i64::wrapping_sub)
    }

    /// Lane-wise saturating i16 addition (`_mm_adds_epi16`).
    #[inline]
    pub fn adds_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::saturating_add)
    }

    /// Lane-wise saturating u8 addition (`_mm_adds_epu8`).
    #[inline]
    pub fn adds_u8(self, rhs: Self) -> Self {
        self.zip_u8(rhs, u8::saturating_add)
    }

    /// Lane-wise saturating u16 addition (`_mm_adds_epu16`).
    #[inline]
    pub fn adds_u16(self, rhs: Self) -> Self {
        self.zip_u16(rhs, u16::saturating_add)
    }

    /// Lane-wise saturating i16 subtraction (`_mm_subs_epi16`).
    #[inline]
    pub fn subs_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::saturating_sub)
    }

    /// Lane-wise saturating u8 subtraction (`_mm_subs_epu8`).
    #[inline]
    pub fn subs_u8(self, rhs: Self) -> Self {
        self.zip_u8(rhs, u8::saturating_sub)
    }

    /// Lane-wise saturating u16 subtraction (`_mm_subs_epu16`).
    #[inline]
    pub fn subs_u16(self, rhs: Self) -> Self {
        self.zip_u16(rhs, u16::saturating_sub)
    }

    /// Lane-wise i16 multiply keeping the low 16 bits (`_mm_mullo_epi16`).
    #[inline]
    pub fn mullo_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::wrapping_mul)
    }
}

// ---------------------------------------------------------------------------
// Logic
// ---------------------------------------------------------------------------

impl V128 {
    /// Bitwise AND (`_mm_and_si128`).
    #[inline]
    pub fn and(self, rhs: Self) -> Self {
        self.zip_u8(rhs, |a, b| a & b)
    }

    /// Bitwise OR (`_mm_or_si128`).
    #[inline]
    pub fn or(self, rhs: Self) -> Self {
        self.zip_u8(rhs, |a, b| a | b)
    }

    /// Bitwise XOR (`_mm_xor_si128`).
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        self.zip_u8(rhs, |a, b| a ^ b)
    }

    /// `(!self) & rhs` (`_mm_andnot_si128`; note the first operand is the
    /// one complemented).
    #[inline]
    pub fn andnot(self, rhs: Self) -> Self {
        self.zip_u8(rhs, |a, b| !a & b)
    }
}

// ---------------------------------------------------------------------------
// Comparison and min/max. Comparisons produce all-ones lanes for true and
// all-zero lanes for false, as the hardware does.
// ---------------------------------------------------------------------------

macro_rules! cmp_lanes {
    ($name:ident, $zip:ident, $t:ty, $doc:literal) => {
        #[doc = $doc]
        #[inline]
        pub fn $name(self, rhs: Self) -> Self {
            self.$zip(rhs, |a, b| if a == b { -1 } else { 0 })
        }
    };
    (gt $name:ident, $zip:ident, $t:ty, $doc:literal) => {
        #[doc = $doc]
        #[inline]
        pub fn $name(self, rhs: Self) -> Self {
            self.$zip(rhs, |a, b| if a > b { -1 } else { 0 })
        }
    };
}

impl V128 {
    cmp_lanes!(cmpeq_i8, zip_i8, i8, "Lane-wise i8 equality mask (`_mm_cmpeq_epi8`).");
    cmp_lanes!(cmpeq_i16, zip_i16, i16, "Lane-wise i16 equality mask (`_mm_cmpeq_epi16`).");
    cmp_lanes!(cmpeq_i32, zip_i32, i32, "Lane-wise i32 equality mask (`_mm_cmpeq_epi32`).");
    cmp_lanes!(gt cmpgt_i8, zip_i8, i8, "Lane-wise signed i8 greater-than mask (`_mm_cmpgt_epi8`).");
    cmp_lanes!(gt cmpgt_i16, zip_i16, i16, "Lane-wise signed i16 greater-than mask (`_mm_cmpgt_epi16`).");
    cmp_lanes!(gt cmpgt_i32, zip_i32, i32, "Lane-wise signed i32 greater-than mask (`_mm_cmpgt_epi32`).");
    cmp_lanes!(gt cmpgt_i64, zip_i64, i64, "Lane-wise signed i64 greater-than mask (`_mm_cmpgt_epi64`).");

    /// Lane-wise u8 maximum (`_mm_max_epu8`).
    #[inline]
    pub fn max_u8(self, rhs: Self) -> Self {
        self.zip_u8(rhs, u8::max)
    }

    /// Lane-wise u8 minimum (`_mm_min_epu8`).
    #[inline]
    pub fn min_u8(self, rhs: Self) -> Self {
        self.zip_u8(rhs, u8::min)
    }

    /// Lane-wise i16 maximum (`_mm_max_epi16`).
    #[inline]
    pub fn max_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::max)
    }

    /// Lane-wise i16 minimum (`_mm_min_epi16`).
    #[inline]
    pub fn min_i16(self, rhs: Self) -> Self {
        self.zip_i16(rhs, i16::min)
    }

    /// Lane-wise i8 maximum (`_mm_max_epi8`).
    #[inline]
    pub fn max_i8(self, rhs: Self) -> Self {
        self.zip_i8(rhs, i8::max)
    }

    /// Lane-wise i8 minimum (`_mm_min_epi8`).
    #[inline]
    pub fn min_i8(self, rhs: Self) -> Self {
        self.zip_i8(rhs, i8::min)
    }

    /// Lane-wise u16 maximum (`_mm_max_epu16`).
    #[inline]
    pub fn max_u16(self, rhs: Self) -> Self {
        self.zip_u16(rhs, u16::max)
    }

    /// Lane-wise u16 minimum (`_mm_min_epu16`).
    #[inline]
    pub fn min_u16(self, rhs: Self) -> Self {
        self.zip_u16(rhs, u16::min)
    }

    /// Lane-wise i32 maximum (`_mm_max_epi32`).
    #[inline]
    pub fn max_i32(self, rhs: Self) -> Self {
        self.zip_i32(rhs, i32::max)
    }

    /// Lane-wise i32 minimum (`_mm_min_epi32`).
    #[inline]
    pub fn min_i32(self, rhs: Self) -> Self {
        self.zip_i32(rhs, i32::min)
    }

    /// Lane-wise u32 maximum (`_mm_max_epu32`).
    #[inline]
    pub fn max_u32(self, rhs: Self) -> Self {
        self.zip_u32(rhs, u32::max)
    }

    /// Lane-wise u32 minimum (`_mm_min_epu32`).
    #[inline]
    pub fn min_u32(self, rhs: Self) -> Self {
        self.zip_u32(rhs, u32::min)
    }
}

// ---------------------------------------------------------------------------
// Shifts. Counts follow x86 semantics: a count at or past the lane width
// shifts everything out (arithmetic right shifts saturate at width - 1 and
// fill with the sign bit).
// ---------------------------------------------------------------------------

impl V128 {
    /// Lane-wise i16 left shift by immediate (`_mm_slli_epi16`).
    #[inline]
    pub fn shl_i16(self, count: u32) -> Self {
        if count >= 16 {
            return Self::zero();
        }
        Self::from_u16x8(self.u16x8().map(|lane| lane << count))
    }

    /// Lane-wise i16 logical right shift by immediate (`_mm_srli_epi16`).
    #[inline]
    pub fn shr_i16(self, count: u32) -> Self {
        if count >= 16 {
            return Self::zero();
        }
        Self::from_u16x8(self.u16x8().map(|lane| lane >> count))
    }

    /// Lane-wise i16 arithmetic right shift by immediate (`_mm_srai_epi16`).
    #[inline]
    pub fn sar_i16(self, count: u32) -> Self {
        let count = count.min(15);
        Self::from_i16x8(self.i16x8().map(|lane| lane >> count))
    }

    /// Lane-wise i32 left shift by immediate (`_mm_slli_epi32`).
    #[inline]
    pub fn shl_i32(self, count: u32) -> Self {
        if count >= 32 {
            return Self::zero();
        }
        Self::from_u32x4(self.u32x4().map(|lane| lane << count))
    }

    /// Lane-wise i32 logical right shift by immediate (`_mm_srli_epi32`).
    #[inline]
    pub fn shr_i32(self, count: u32) -> Self {
        if count >= 32 {
            return Self::zero();
        }
        Self::from_u32x4(self.u32x4().map(|lane| lane >> count))
    }

    /// Lane-wise i32 arithmetic right shift by immediate (`_mm_srai_epi32`).
    #[inline]
    pub fn sar_i32(self, count: u32) -> Self {
        let count = count.min(31);
        Self::from_i32x4(self.i32x4().map(|lane| lane >> count))
    }

    /// Whole-vector left shift by bytes (`_mm_slli_si128`). Shifting by 16
    /// or more bytes yields zero.
    #[inline]
    pub fn shl_bytes(self, count: usize) -> Self {
        if count >= 16 {
            return Self::zero();
        }
        let mut out = [0u8; 16];
        for i in 0..16 - count {
            out[i + count] = self.0[i];
        }
        Self(out)
    }

    /// Whole-vector right shift by bytes (`_mm_srli_si128`). Shifting by 16
    /// or more bytes yields zero.
    #[inline]
    pub fn shr_bytes(self, count: usize) -> Self {
        if count >= 16 {
            return Self::zero();
        }
        let mut out = [0u8; 16];
        for i in count..16 {
            out[i - count] = self.0[i];
        }
        Self(out)
    }
}

// ---------------------------------------------------------------------------
// Permutes and narrowing
// ---------------------------------------------------------------------------

macro_rules! unpack_lanes {
    ($lo:ident, $hi:ident, $to:ident, $from:ident, $t:ty, $n:expr, $family:literal) => {
        #[doc = concat!("Interleaves the low halves (`_mm_unpacklo_", $family, "`).")]
        #[inline]
        pub fn $lo(self, rhs: Self) -> Self {
            let (a, b) = (self.$to(), rhs.$to());
            let mut out = [0 as $t; $n];
            for i in 0..$n / 2 {
                out[2 * i] = a[i];
                out[2 * i + 1] = b[i];
            }
            Self::$from(out)
        }

        #[doc = concat!("Interleaves the high halves (`_mm_unpackhi_", $family, "`).")]
        #[inline]
        pub fn $hi(self, rhs: Self) -> Self {
            let (a, b) = (self.$to(), rhs.$to());
            let mut out = [0 as $t; $n];
            for i in 0..$n / 2 {
                out[2 * i] = a[$n / 2 + i];
                out[2 * i + 1] = b[$n / 2 + i];
            }
            Self::$from(out)
        }
    };
}

impl V128 {
    unpack_lanes!(unpacklo_i8, unpackhi_i8, u8x16, from_u8x16, u8, 16, "epi8");
    unpack_lanes!(unpacklo_i16, unpackhi_i16, u16x8, from_u16x8, u16, 8, "epi16");
    unpack_lanes!(unpacklo_i32, unpackhi_i32, u32x4, from_u32x4, u32, 4, "epi32");
    unpack_lanes!(unpacklo_i64, unpackhi_i64, u64x2, from_u64x2, u64, 2, "epi64");

    /// Selects i32 lanes by a two-bit index per output lane
    /// (`_mm_shuffle_epi32`).
    #[inline]
    pub fn shuffle_lanes_i32(self, selector: u8) -> Self {
        let lanes = self.i32x4();
        let mut out = [0i32; 4];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = lanes[((selector >> (2 * i)) & 0b11) as usize];
        }
        Self::from_i32x4(out)
    }

    /// Packs i16 lanes of `self` then `rhs` into i8 lanes with signed
    /// saturation (`_mm_packs_epi16`).
    #[inline]
    pub fn packs_i16(self, rhs: Self) -> Self {
        let (a, b) = (self.i16x8(), rhs.i16x8());
        let mut out = [0i8; 16];
        for i in 0..8 {
            out[i] = a[i].clamp(i8::MIN as i16, i8::MAX as i16) as i8;
            out[8 + i] = b[i].clamp(i8::MIN as i16, i8::MAX as i16) as i8;
        }
        Self::from_i8x16(out)
    }

    /// Packs i16 lanes of `self` then `rhs` into u8 lanes with unsigned
    /// saturation (`_mm_packus_epi16`).
    #[inline]
    pub fn packus_i16(self, rhs: Self) -> Self {
        let (a, b) = (self.i16x8(), rhs.i16x8());
        let mut out = [0u8; 16];
        for i in 0..8 {
            out[i] = a[i].clamp(0, u8::MAX as i16) as u8;
            out[8 + i] = b[i].clamp(0, u8::MAX as i16) as u8;
        }
        Self::from_u8x16(out)
    }

    /// Byte shuffle (`_mm_shuffle_epi8`): selector lanes with the high bit
    /// set produce zero, the low four bits index into `self` otherwise.
    #[inline]
    pub fn shuffle_i8(self, selector: Self) -> Self {
        let mut out = [0u8; 16];
        for (lane, sel) in out.iter_mut().zip(selector.0) {
            if sel & 0x80 == 0 {
                *lane = self.0[(sel & 0x0F) as usize];
            }
        }
        Self(out)
    }

    /// Concatenates `self` (high) and `low`, then extracts 16 bytes
    /// starting `count` bytes in (`_mm_alignr_epi8`). Counts of 32 or more
    /// yield zero; 16..=31 read from `self` shifted right.
    #[inline]
    pub fn alignr_i8(self, low: Self, count: usize) -> Self {
        if count >= 32 {
            return Self::zero();
        }
        let mut cat = [0u8; 32];
        cat[..16].copy_from_slice(&low.0);
        cat[16..].copy_from_slice(&self.0);
        let mut out = [0u8; 16];
        let available = 32 - count;
        let take = available.min(16);
        out[..take].copy_from_slice(&cat[count..count + take]);
        Self(out)
    }
}

// ---------------------------------------------------------------------------
// SSSE3 / SSE4.1 scalar semantics
// ---------------------------------------------------------------------------

impl V128 {
    /// Lane-wise i8 absolute value (`_mm_abs_epi8`). `i8::MIN` wraps to
    /// itself, as on hardware.
    #[inline]
    pub fn abs_i8(self) -> Self {
        Self::from_i8x16(self.i8x16().map(i8::wrapping_abs))
    }

    /// Lane-wise i16 absolute value (`_mm_abs_epi16`).
    #[inline]
    pub fn abs_i16(self) -> Self {
        Self::from_i16x8(self.i16x8().map(i16::wrapping_abs))
    }

    /// Lane-wise i32 absolute value (`_mm_abs_epi32`).
    #[inline]
    pub fn abs_i32(self) -> Self {
        Self::from_i32x4(self.i32x4().map(i32::wrapping_abs))
    }

    /// Selects bytes from `rhs` where the mask byte's high bit is set,
    /// otherwise from `self` (`_mm_blendv_epi8`).
    #[inline]
    pub fn blendv_i8(self, rhs: Self, mask: Self) -> Self {
        let mut out = [0u8; 16];
        for i in 0..16 {
            out[i] = if mask.0[i] & 0x80 != 0 {
                rhs.0[i]
            } else {
                self.0[i]
            };
        }
        Self(out)
    }

    /// Returns 1 when `self & rhs` is all zero (`_mm_testz_si128`).
    #[inline]
    pub fn testz(self, rhs: Self) -> i32 {
        i32::from(self.and(rhs) == Self::zero())
    }

    /// Returns 1 when every bit is set (`_mm_test_all_ones`).
    #[inline]
    pub fn test_all_ones(self) -> i32 {
        i32::from(self.0 == [0xFF; 16])
    }

    /// Zero-extends byte lane `lane` to i32 (`_mm_extract_epi8`).
    #[inline]
    pub fn extract_u8(self, lane: usize) -> i32 {
        i32::from(self.0[lane & 0x0F])
    }

    /// Extracts i32 lane `lane` (`_mm_extract_epi32`).
    #[inline]
    pub fn extract_i32(self, lane: usize) -> i32 {
        self.i32x4()[lane & 0b11]
    }

    /// Collects the sign bit of each byte lane into the low 16 bits of the
    /// result (`_mm_movemask_epi8`).
    #[inline]
    pub fn movemask_i8(self) -> i32 {
        self.0
            .iter()
            .enumerate()
            .fold(0, |mask, (i, byte)| mask | (i32::from(byte >> 7) << i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> V128 {
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = i as u8;
        }
        V128::from_bytes(bytes)
    }

    #[test]
    fn lane_views_round_trip() {
        let v = ramp();
        assert_eq!(V128::from_i16x8(v.i16x8()), v);
        assert_eq!(V128::from_i32x4(v.i32x4()), v);
        assert_eq!(V128::from_i64x2(v.i64x2()), v);
    }

    #[test]
    fn lane_order_is_little_endian() {
        let v = V128::from_bytes([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(v.to_i32_low(), 1);
        assert_eq!(v.i16x8()[0], 1);
    }

    #[test]
    fn saturating_ops_clamp() {
        let hi = V128::splat_i16(i16::MAX);
        let one = V128::splat_i16(1);
        assert_eq!(hi.adds_i16(one), hi);
        assert_eq!(V128::splat_i16(i16::MIN).subs_i16(one), V128::splat_i16(i16::MIN));
        assert_eq!(V128::splat_i8(-1).adds_u8(V128::splat_i8(-1)), V128::splat_i8(-1));
    }

    #[test]
    fn shifts_past_lane_width_zero() {
        let v = ramp();
        assert_eq!(v.shl_i16(16), V128::zero());
        assert_eq!(v.shr_i32(32), V128::zero());
        assert_eq!(v.shl_bytes(16), V128::zero());
        // arithmetic right shift saturates at width - 1 instead
        assert_eq!(
            V128::splat_i16(-1).sar_i16(40),
            V128::splat_i16(-1)
        );
    }

    #[test]
    fn shuffle_high_bit_zeroes_lane() {
        let v = ramp();
        let selector = V128::from_bytes([0x80; 16]);
        assert_eq!(v.shuffle_i8(selector), V128::zero());

        let identity = ramp();
        assert_eq!(v.shuffle_i8(identity), v);
    }

    #[test]
    fn alignr_windows() {
        let a = ramp();
        let b = V128::splat_i8(-1);
        assert_eq!(a.alignr_i8(b, 0), b);
        assert_eq!(a.alignr_i8(b, 16), a);
        assert_eq!(a.alignr_i8(b, 32), V128::zero());
        let shifted = a.alignr_i8(b, 20);
        assert_eq!(shifted, a.shr_bytes(4));
    }

    #[test]
    fn movemask_collects_sign_bits() {
        assert_eq!(V128::splat_i8(-1).movemask_i8(), 0xFFFF);
        assert_eq!(V128::zero().movemask_i8(), 0);
        let mut bytes = [0u8; 16];
        bytes[3] = 0x80;
        assert_eq!(V128::from_bytes(bytes).movemask_i8(), 1 << 3);
    }

    #[test]
    fn andnot_complements_first_operand() {
        let a = V128::splat_i32(0x0F0F_0F0F);
        let b = V128::splat_i32(-1);
        assert_eq!(a.andnot(b), V128::splat_i32(!0x0F0F_0F0F));
    }
}
