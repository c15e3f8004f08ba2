//! AVX2 declarations for the translation shim.
//!
//! Declaration completeness only: the 256-bit vector type is defined so
//! that signatures naming `__m256i` compile on every target, but no
//! 256-bit operations are provided. Code paths that use them must be gated
//! on `cfg(target_feature = "avx2")`, which is never true on shim targets,
//! so those paths are compiled out rather than failing to build. AVX-512
//! is not declared at all; code has fallbacks when its feature cfgs are
//! absent.

/// 256-bit integer vector, named and laid out as on x86. Declaration only;
/// no operations are defined on shim targets.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
#[repr(C, align(32))]
pub struct __m256i(#[allow(dead_code)] [u8; 32]);
