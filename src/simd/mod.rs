//! The intrinsics resolver: one inclusion point, resolved per target.
//!
//! Calling code imports this module instead of any architecture-specific
//! intrinsic module:
//!
//! ```rust
//! use simd_compat::simd::*;
//! ```
//!
//! What that import resolves to is decided entirely at compile time:
//!
//! - **x86 / x86_64**: the whole native intrinsic namespace
//!   (`core::arch::x86_64` or `core::arch::x86`) is re-exported. No
//!   translation, no cost, no semantic gap. This is the reference behavior
//!   every other target must match.
//! - **any other target**: the translation shim is compiled in and
//!   re-exported under the same names, provided the `portable` feature is
//!   enabled. Missing feature is a build configuration error and fails
//!   compilation right here.
//!
//! Exactly one of the two paths is active in a given compilation unit,
//! never both, never neither; the `cfg` arms below are mutually exclusive
//! and exhaustive. Re-importing this module any number of ways is
//! idempotent, as module imports always are.
//!
//! # Optional instruction families
//!
//! SSE2 is the baseline and is always available. SSSE3, SSE4.1 and SSE4.2
//! are implemented by the shim on every non-x86 target; on x86 their
//! availability is the hardware's, guarded the usual way
//! (`is_x86_feature_detected!` or `target_feature`). AVX2 exists on shim
//! targets as a type declaration only, and AVX-512 not at all: code paths
//! behind `cfg(target_feature = "avx2")` and wider simply compile out on
//! non-x86 targets, which is the single failure mode for unavailable wide
//! families everywhere.

#[cfg(target_arch = "x86")]
pub use core::arch::x86::*;

#[cfg(target_arch = "x86_64")]
pub use core::arch::x86_64::*;

#[cfg(all(
    not(any(target_arch = "x86", target_arch = "x86_64")),
    feature = "portable"
))]
mod shim;

#[cfg(all(
    not(any(target_arch = "x86", target_arch = "x86_64")),
    feature = "portable"
))]
pub use shim::*;

#[cfg(all(
    not(any(target_arch = "x86", target_arch = "x86_64")),
    not(feature = "portable")
))]
compile_error!(
    "simd-compat: this target is not x86-family, so the x86 intrinsics must come \
     from the translation shim; enable the `portable` feature of simd-compat"
);
