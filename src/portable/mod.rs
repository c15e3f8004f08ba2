//! Portable reference model for the supported intrinsic subset.
//!
//! This module implements every operation the crate guarantees as plain
//! lane-wise Rust over a 128-bit value, [`v128::V128`]. It is compiled on
//! every target and serves two roles:
//!
//! - it is the scalar backend of the translation shim on non-x86 targets
//!   that have no usable vector unit;
//! - it is the oracle the test suite compares the resolved intrinsics
//!   against. On x86 hosts the tests check the native intrinsics against
//!   this model; on shim targets they check the shim against the same
//!   model, which ties the two resolutions to one behavior.
//!
//! It is **not** an intrinsic namespace and takes no part in the
//! architecture resolution performed by [`crate::simd`]: calling code that
//! wants intrinsics goes through `crate::simd` and gets exactly one of the
//! native or shim paths.
//!
//! All lane semantics follow the Intel SDM definitions of the corresponding
//! instructions, including out-of-range shift behavior (counts at or past
//! the lane width produce zero, arithmetic right shifts saturate at
//! width − 1) and byte-order (lane 0 is the lowest-addressed bytes).

pub mod crc32;
pub mod v128;

pub use v128::V128;
