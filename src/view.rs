//! What a renderer reads back after each step.

use crate::float::Float;
use crate::vec::Vec2;

/// A constraint as a line between its endpoints. Draw only when not broken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<F: Float = f64> {
    pub a: Vec2<F>,
    pub b: Vec2<F>,
    pub broken: bool,
}

/// Pointer highlight. `active` is true while a drag holds particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerIndicator<F: Float = f64> {
    pub position: Vec2<F>,
    pub radius: F,
    pub active: bool,
}
