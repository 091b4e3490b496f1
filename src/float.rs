//! Floating-point abstraction so the cloth runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the simulation needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays
/// `no_std`. Constants are passed through [`Float::from_f64`] so that `f64`
/// simulations see the exact decimal values (`0.99`, `0.7`, ...) rather than
/// a widened `f32` approximation.
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
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;
    /// Convert from f64 (constants, configuration).
    fn from_f64(v: f64) -> Self;
    /// Convert from a grid index or count.
    fn from_usize(v: usize) -> Self;
    /// Widen to f64, for log fields.
    fn to_f64(self) -> f64;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(v: f64) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_f64(self) -> f64 { self }
}
