//! Equivalence tests for baseline shifts, shuffles, unpacks and packs.
//!
//! Shift immediates are exercised at zero, mid-range, the last in-range
//! count and past the lane width, where x86 defines the result as zero
//! (sign-fill for arithmetic right shifts).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd_compat::portable::V128;
use simd_compat::simd::*;

fn load(v: V128) -> __m128i {
    let bytes = v.to_bytes();
    unsafe { _mm_loadu_si128(bytes.as_ptr() as *const __m128i) }
}

fn bytes_of(v: __m128i) -> [u8; 16] {
    let mut out = [0u8; 16];
    unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, v) };
    out
}

fn test_vectors(seed: u64) -> Vec<V128> {
    let mut vectors = vec![
        V128::zero(),
        V128::splat_i8(-1),
        V128::splat_i16(i16::MIN),
        V128::splat_i32(i32::MIN),
        V128::from_bytes(core::array::from_fn(|i| i as u8)),
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    vectors.extend((0..200).map(|_| V128::from_bytes(rng.random())));
    vectors
}

macro_rules! check_shift {
    ($intrinsic:ident, $model:ident, $v:expr, $imm:literal) => {{
        let v = $v;
        let got = bytes_of(unsafe { $intrinsic::<$imm>(load(v)) });
        let want = v.$model($imm).to_bytes();
        assert_eq!(
            got,
            want,
            "{}::<{}> diverged for {v:?}",
            stringify!($intrinsic),
            $imm
        );
    }};
}

#[test]
fn element_shifts_match_model() {
    for v in test_vectors(0x51F7) {
        check_shift!(_mm_slli_epi16, shl_i16, v, 0);
        check_shift!(_mm_slli_epi16, shl_i16, v, 3);
        check_shift!(_mm_slli_epi16, shl_i16, v, 15);
        check_shift!(_mm_srli_epi16, shr_i16, v, 1);
        check_shift!(_mm_srli_epi16, shr_i16, v, 8);
        check_shift!(_mm_srli_epi16, shr_i16, v, 15);
        check_shift!(_mm_srai_epi16, sar_i16, v, 2);
        check_shift!(_mm_srai_epi16, sar_i16, v, 15);
        check_shift!(_mm_slli_epi32, shl_i32, v, 7);
        check_shift!(_mm_slli_epi32, shl_i32, v, 31);
        check_shift!(_mm_srli_epi32, shr_i32, v, 9);
        check_shift!(_mm_srli_epi32, shr_i32, v, 31);
        check_shift!(_mm_srai_epi32, sar_i32, v, 13);
        check_shift!(_mm_srai_epi32, sar_i32, v, 31);
    }
}

#[test]
fn element_shifts_past_lane_width() {
    for v in test_vectors(0x51F8) {
        check_shift!(_mm_slli_epi16, shl_i16, v, 16);
        check_shift!(_mm_srli_epi16, shr_i16, v, 16);
        check_shift!(_mm_slli_epi32, shl_i32, v, 32);
        check_shift!(_mm_srli_epi32, shr_i32, v, 32);
        // arithmetic shifts saturate at width - 1 instead of zeroing
        check_shift!(_mm_srai_epi16, sar_i16, v, 16);
        check_shift!(_mm_srai_epi32, sar_i32, v, 32);
    }
}

macro_rules! check_byte_shift {
    ($intrinsic:ident, $model:ident, $v:expr, $imm:literal) => {{
        let v = $v;
        let got = bytes_of(unsafe { $intrinsic::<$imm>(load(v)) });
        let want = v.$model($imm).to_bytes();
        assert_eq!(
            got,
            want,
            "{}::<{}> diverged for {v:?}",
            stringify!($intrinsic),
            $imm
        );
    }};
}

#[test]
fn byte_shifts_match_model() {
    for v in test_vectors(0xB17E) {
        check_byte_shift!(_mm_slli_si128, shl_bytes, v, 0);
        check_byte_shift!(_mm_slli_si128, shl_bytes, v, 1);
        check_byte_shift!(_mm_slli_si128, shl_bytes, v, 8);
        check_byte_shift!(_mm_slli_si128, shl_bytes, v, 15);
        check_byte_shift!(_mm_srli_si128, shr_bytes, v, 0);
        check_byte_shift!(_mm_srli_si128, shr_bytes, v, 1);
        check_byte_shift!(_mm_srli_si128, shr_bytes, v, 8);
        check_byte_shift!(_mm_srli_si128, shr_bytes, v, 15);
    }
}

#[test]
fn shuffle_epi32_selects_lanes() {
    for v in test_vectors(0x5FF1) {
        // identity, reverse, broadcast lane 0, broadcast lane 3
        let got = bytes_of(unsafe { _mm_shuffle_epi32::<0b11_10_01_00>(load(v)) });
        assert_eq!(got, v.shuffle_lanes_i32(0b11_10_01_00).to_bytes());
        let got = bytes_of(unsafe { _mm_shuffle_epi32::<0b00_01_10_11>(load(v)) });
        assert_eq!(got, v.shuffle_lanes_i32(0b00_01_10_11).to_bytes());
        let got = bytes_of(unsafe { _mm_shuffle_epi32::<0b00_00_00_00>(load(v)) });
        assert_eq!(got, v.shuffle_lanes_i32(0).to_bytes());
        let got = bytes_of(unsafe { _mm_shuffle_epi32::<0b11_11_11_11>(load(v)) });
        assert_eq!(got, v.shuffle_lanes_i32(0xFF).to_bytes());
    }
}

macro_rules! check_binop {
    ($test:ident, $intrinsic:ident, $model:ident) => {
        #[test]
        fn $test() {
            let vectors = test_vectors(0x17EA);
            for &a in &vectors {
                for &b in &vectors {
                    let got = bytes_of(unsafe { $intrinsic(load(a), load(b)) });
                    let want = a.$model(b).to_bytes();
                    assert_eq!(
                        got,
                        want,
                        "{} diverged for {a:?}, {b:?}",
                        stringify!($intrinsic)
                    );
                }
            }
        }
    };
}

check_binop!(unpacklo_epi8_matches_model, _mm_unpacklo_epi8, unpacklo_i8);
check_binop!(unpackhi_epi8_matches_model, _mm_unpackhi_epi8, unpackhi_i8);
check_binop!(unpacklo_epi16_matches_model, _mm_unpacklo_epi16, unpacklo_i16);
check_binop!(unpackhi_epi16_matches_model, _mm_unpackhi_epi16, unpackhi_i16);
check_binop!(unpacklo_epi32_matches_model, _mm_unpacklo_epi32, unpacklo_i32);
check_binop!(unpackhi_epi32_matches_model, _mm_unpackhi_epi32, unpackhi_i32);
check_binop!(unpacklo_epi64_matches_model, _mm_unpacklo_epi64, unpacklo_i64);
check_binop!(unpackhi_epi64_matches_model, _mm_unpackhi_epi64, unpackhi_i64);
check_binop!(packs_epi16_matches_model, _mm_packs_epi16, packs_i16);
check_binop!(packus_epi16_matches_model, _mm_packus_epi16, packus_i16);
