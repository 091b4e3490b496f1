//! The rectangular area particles are kept inside.

use crate::error::{ClothError, ClothResult};
use crate::float::Float;
use crate::particle::Particle;

/// Floor and side walls of the simulation area.
///
/// There is no ceiling. The floor sits `floor_margin` above `height`, the
/// walls `wall_margin` inside `0` and `width`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float = f64> {
    pub width: F,
    pub height: F,
    pub floor_margin: F,
    pub wall_margin: F,
    /// Share of horizontal velocity removed on floor contact.
    pub floor_friction: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> ClothResult<Self> {
        let bounds = Bounds {
            width,
            height,
            floor_margin: F::from_f64(5.0),
            wall_margin: F::one(),
            floor_friction: F::from_f64(0.1),
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Size must be finite and positive, margins finite and non-negative,
    /// friction within `[0, 1]`.
    pub fn validate(&self) -> ClothResult<()> {
        let size = |v: F| v.is_finite() && v > F::zero();
        let margin = |v: F| v.is_finite() && v >= F::zero();
        if !size(self.width)
            || !size(self.height)
            || !margin(self.floor_margin)
            || !margin(self.wall_margin)
            || !margin(self.floor_friction)
            || self.floor_friction > F::one()
        {
            return Err(ClothError::InvalidBounds);
        }
        Ok(())
    }

    pub fn floor(&self) -> F {
        self.height - self.floor_margin
    }

    /// Keep `p` inside the area.
    ///
    /// Floor contact first: `y` is pinned to the floor and `x` loses a tenth
    /// of its implicit velocity, `prev_pos` untouched. Then `x` is clipped to
    /// the walls with no velocity correction.
    pub fn clamp(&self, p: &mut Particle<F>) {
        let floor = self.floor();
        if p.pos.y >= floor {
            p.pos.y = floor;
            p.pos.x = p.pos.x - (p.pos.x - p.prev_pos.x) * self.floor_friction;
        }

        let right = self.width - self.wall_margin;
        if p.pos.x >= right {
            p.pos.x = right;
        } else if p.pos.x <= self.wall_margin {
            p.pos.x = self.wall_margin;
        }
    }
}
