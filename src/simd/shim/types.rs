//! Vector types for the translation shim.
//!
//! The shim exposes the x86 type names so calling code compiles unchanged:
//!
//! - On the NEON backend `__m128i` is a transparent wrapper over
//!   `uint8x16_t`, with helpers for the lossless lane reinterpretations the
//!   per-instruction modules need. All reinterpretations are plain bitcasts
//!   (no lane reordering) via NEON `vreinterpret` intrinsics.
//! - On the portable backend `__m128i` wraps the reference model's
//!   [`V128`] directly.
//!
//! Both backends can convert to and from [`V128`]; operations without a
//! clean native mapping route through the model.

use crate::portable::V128;

#[cfg(shim_neon)]
pub(crate) use core::arch::aarch64 as neon;

/// 128-bit integer vector, named and laid out as on x86.
#[allow(non_camel_case_types)]
#[cfg(shim_neon)]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128i(pub(crate) neon::uint8x16_t);

/// 128-bit integer vector, named and laid out as on x86.
#[allow(non_camel_case_types)]
#[cfg(shim_portable)]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct __m128i(pub(crate) V128);

impl core::fmt::Debug for __m128i {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "__m128i({:?})", self.to_model().to_bytes())
    }
}

#[cfg(shim_neon)]
impl __m128i {
    /// View as signed 8-bit lanes.
    #[inline]
    pub(crate) fn as_s8(self) -> neon::int8x16_t {
        unsafe { neon::vreinterpretq_s8_u8(self.0) }
    }

    /// Construct from signed 8-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_s8(v: neon::int8x16_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_s8(v) })
    }

    /// View as signed 16-bit lanes.
    #[inline]
    pub(crate) fn as_s16(self) -> neon::int16x8_t {
        unsafe { neon::vreinterpretq_s16_u8(self.0) }
    }

    /// Construct from signed 16-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_s16(v: neon::int16x8_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_s16(v) })
    }

    /// View as unsigned 16-bit lanes.
    #[inline]
    pub(crate) fn as_u16(self) -> neon::uint16x8_t {
        unsafe { neon::vreinterpretq_u16_u8(self.0) }
    }

    /// Construct from unsigned 16-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_u16(v: neon::uint16x8_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_u16(v) })
    }

    /// View as signed 32-bit lanes.
    #[inline]
    pub(crate) fn as_s32(self) -> neon::int32x4_t {
        unsafe { neon::vreinterpretq_s32_u8(self.0) }
    }

    /// Construct from signed 32-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_s32(v: neon::int32x4_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_s32(v) })
    }

    /// View as unsigned 32-bit lanes.
    #[inline]
    pub(crate) fn as_u32(self) -> neon::uint32x4_t {
        unsafe { neon::vreinterpretq_u32_u8(self.0) }
    }

    /// Construct from unsigned 32-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_u32(v: neon::uint32x4_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_u32(v) })
    }

    /// View as signed 64-bit lanes.
    #[inline]
    pub(crate) fn as_s64(self) -> neon::int64x2_t {
        unsafe { neon::vreinterpretq_s64_u8(self.0) }
    }

    /// Construct from unsigned 64-bit lanes by reinterpretation.
    #[inline]
    pub(crate) fn from_u64(v: neon::uint64x2_t) -> Self {
        Self(unsafe { neon::vreinterpretq_u8_u64(v) })
    }

    /// Copies the register out into the reference model.
    #[inline]
    pub(crate) fn to_model(self) -> V128 {
        let mut bytes = [0u8; 16];
        unsafe { neon::vst1q_u8(bytes.as_mut_ptr(), self.0) };
        V128::from_bytes(bytes)
    }

    /// Loads a reference model value into a register.
    #[inline]
    pub(crate) fn from_model(model: V128) -> Self {
        let bytes = model.to_bytes();
        Self(unsafe { neon::vld1q_u8(bytes.as_ptr()) })
    }
}

#[cfg(shim_portable)]
impl __m128i {
    #[inline]
    pub(crate) fn to_model(self) -> V128 {
        self.0
    }

    #[inline]
    pub(crate) fn from_model(model: V128) -> Self {
        Self(model)
    }
}
