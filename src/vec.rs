//! Planar vector type used for particle positions and offsets.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector. `y` grows downward, the way canvas coordinates do, so gravity
/// is a positive `y` acceleration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}
