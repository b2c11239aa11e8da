//! Floating-point abstraction so the cloth can run in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the cloth solver needs.
///
/// Implemented for `f32` and `f64`. Math goes through `libm` so the crate
/// stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Positive infinity.
    fn infinity() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Lossy conversion to f32, for draw buffers handed to a host.
    fn to_f32(self) -> f32;
    /// Lossy conversion to usize, truncating toward zero. Negative and NaN map to 0.
    fn to_usize(self) -> usize;
    /// True unless NaN or infinite.
    fn is_finite(self) -> bool;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn infinity() -> Self { f32::INFINITY }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn to_f32(self) -> f32 { self }
    fn to_usize(self) -> usize { self as usize }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn infinity() -> Self { f64::INFINITY }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn to_f32(self) -> f32 { self as f32 }
    fn to_usize(self) -> usize { self as usize }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_saturates_both_ends() {
        assert_eq!(Float::clamp(-3.0f32, 0.0, 10.0), 0.0);
        assert_eq!(Float::clamp(13.0f64, 0.0, 10.0), 10.0);
        assert_eq!(Float::clamp(4.5f32, 0.0, 10.0), 4.5);
    }

    #[test]
    fn to_usize_truncates() {
        assert_eq!(32.9f32.to_usize(), 32);
        assert_eq!(24.0f64.to_usize(), 24);
        assert_eq!((-1.0f32).to_usize(), 0);
    }
}
