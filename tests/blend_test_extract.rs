//! Equivalence tests for the SSE4.1 family: blendv, the extended min/max
//! matrix, vector test predicates and lane extraction.

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

macro_rules! require_x86_feature {
    ($feature:tt) => {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if !std::arch::is_x86_feature_detected!($feature) {
            eprintln!("skipping: host has no {}", $feature);
            return;
        }
    };
}

fn test_vectors(seed: u64) -> Vec<V128> {
    let mut vectors = vec![
        V128::zero(),
        V128::splat_i8(-1),
        V128::splat_i8(i8::MIN),
        V128::splat_i16(i16::MIN),
        V128::splat_i32(i32::MIN),
        V128::from_bytes(core::array::from_fn(|i| i as u8)),
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    vectors.extend((0..150).map(|_| V128::from_bytes(rng.random())));
    vectors
}

macro_rules! check_binop {
    ($test:ident, $intrinsic:ident, $model:ident) => {
        #[test]
        fn $test() {
            require_x86_feature!("sse4.1");

            let vectors = test_vectors(0x41);
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

check_binop!(min_epi8_matches_model, _mm_min_epi8, min_i8);
check_binop!(max_epi8_matches_model, _mm_max_epi8, max_i8);
check_binop!(min_epu16_matches_model, _mm_min_epu16, min_u16);
check_binop!(max_epu16_matches_model, _mm_max_epu16, max_u16);
check_binop!(min_epi32_matches_model, _mm_min_epi32, min_i32);
check_binop!(max_epi32_matches_model, _mm_max_epi32, max_i32);
check_binop!(min_epu32_matches_model, _mm_min_epu32, min_u32);
check_binop!(max_epu32_matches_model, _mm_max_epu32, max_u32);

#[test]
fn blendv_epi8_keys_on_mask_sign_bit() {
    require_x86_feature!("sse4.1");

    let vectors = test_vectors(0xB1E);
    let masks = [
        V128::zero(),
        V128::splat_i8(-1),
        V128::from_bytes([0x80; 16]),
        V128::from_bytes([0x7F; 16]), // high bit clear everywhere
        V128::from_bytes(core::array::from_fn(|i| if i % 2 == 0 { 0x80 } else { 0 })),
    ];

    for &a in &vectors {
        for &b in vectors.iter().take(20) {
            for &mask in &masks {
                let got = bytes_of(unsafe { _mm_blendv_epi8(load(a), load(b), load(mask)) });
                let want = a.blendv_i8(b, mask).to_bytes();
                assert_eq!(got, want, "blendv diverged for {a:?}, {b:?}, {mask:?}");
            }
        }
    }
}

#[test]
fn test_predicates_match_model() {
    require_x86_feature!("sse4.1");

    let vectors = test_vectors(0x7E57);
    for &a in &vectors {
        for &b in &vectors {
            assert_eq!(
                unsafe { _mm_testz_si128(load(a), load(b)) },
                a.testz(b),
                "testz diverged for {a:?}, {b:?}"
            );
            assert_eq!(
                unsafe { _mm_test_all_zeros(load(a), load(b)) },
                a.testz(b),
            );
        }
        assert_eq!(unsafe { _mm_test_all_ones(load(a)) }, a.test_all_ones());
    }

    // the disjoint and the saturated cases, explicitly
    let lo = V128::from_lanes_i64([-1, 0]);
    let hi = V128::from_lanes_i64([0, -1]);
    assert_eq!(unsafe { _mm_testz_si128(load(lo), load(hi)) }, 1);
    assert_eq!(unsafe { _mm_test_all_ones(load(V128::splat_i8(-1))) }, 1);
    assert_eq!(unsafe { _mm_test_all_ones(load(lo)) }, 0);
}

#[test]
fn extract_lanes_match_model() {
    require_x86_feature!("sse4.1");

    for v in test_vectors(0xE87) {
        assert_eq!(unsafe { _mm_extract_epi8::<0>(load(v)) }, v.extract_u8(0));
        assert_eq!(unsafe { _mm_extract_epi8::<9>(load(v)) }, v.extract_u8(9));
        assert_eq!(unsafe { _mm_extract_epi8::<15>(load(v)) }, v.extract_u8(15));
        assert_eq!(unsafe { _mm_extract_epi32::<0>(load(v)) }, v.extract_i32(0));
        assert_eq!(unsafe { _mm_extract_epi32::<2>(load(v)) }, v.extract_i32(2));
        assert_eq!(unsafe { _mm_extract_epi32::<3>(load(v)) }, v.extract_i32(3));
    }
}
