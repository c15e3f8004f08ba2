//! Compile-time portability layer for x86 SIMD intrinsics.
//!
//! Code written against the x86 intrinsic surface (`__m128i`, `_mm_*`)
//! compiles and runs unmodified on non-x86 architectures. The single
//! inclusion point is [`simd`]: on x86/x86_64 it re-exports the native
//! `core::arch` intrinsics wholesale, on every other target it resolves to
//! a translation shim that provides the same names and semantics on NEON
//! (aarch64) or on a scalar reference model (anything else).
//!
//! ```rust
//! use simd_compat::simd::*;
//!
//! let bytes = [7u8; 16];
//! let splat = unsafe { _mm_set1_epi8(7) };
//! let loaded = unsafe { _mm_loadu_si128(bytes.as_ptr() as *const __m128i) };
//! let same = unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(splat, loaded)) };
//! assert_eq!(same, 0xFFFF);
//! ```
//!
//! # Resolution, not abstraction
//!
//! This crate does not define new intrinsics and does not paper over
//! instruction-set differences beyond the guaranteed subset. It decides,
//! once per compilation unit and entirely at compile time, which facility
//! backs the intrinsic names, and guarantees that the baseline family
//! (the SSE2 integer surface) behaves identically everywhere. Performance
//! uniformity across architectures is explicitly not a goal.
//!
//! # Building for non-x86 targets
//!
//! The build system must enable the `portable` feature when compiling for
//! any non-x86 target; without it compilation fails with an error naming
//! the feature. On x86/x86_64 the feature is a harmless no-op. The shim
//! backend (NEON or scalar) is picked by the build script from the target
//! configuration, never from the build host.
//!
//! # What is guaranteed where
//!
//! | Family | x86/x86_64 | non-x86 |
//! |---|---|---|
//! | SSE2 integer subset | native | shim, bit-identical results |
//! | SSSE3 / SSE4.1 / SSE4.2 subset | native, hardware-gated | shim, always available |
//! | AVX2 | native, hardware-gated | `__m256i` declaration only |
//! | AVX-512 | native, hardware-gated | absent; gate code on its cfgs |

pub mod portable;
pub mod simd;
