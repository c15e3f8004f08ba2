//! Translation shim: the x86 intrinsic surface on non-x86 targets.
//!
//! Compiled only when the target is not x86-family and the `portable`
//! feature is enabled. The instruction-set families are declared in
//! dependency order, baseline first: SSE2, then SSSE3, SSE4.1, SSE4.2,
//! then the AVX2 declarations. Each family may rely on types and helpers
//! introduced by the one before it and on nothing after it.
//!
//! The backend is picked by the build script: `shim_neon` on aarch64 with
//! NEON, `shim_portable` anywhere else. Exactly one of the two is active.

mod types;

mod sse2;

mod ssse3;

mod sse41;

mod sse42;

mod avx2;

pub use avx2::__m256i;
pub use sse2::*;
pub use sse41::*;
pub use sse42::*;
pub use ssse3::*;
pub use types::__m128i;
