//! Verlet particles with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle. Velocity is `pos - prev_pos`.
///
/// `mass` doubles as a participation weight: zero means the particle is
/// pinned or held by the pointer, and neither integration nor its own side
/// of a constraint will move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float = f64> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub mass: F,
    /// Pointer minus particle position, captured when a drag begins.
    pub drag_offset: Vec2<F>,
    pub dragged: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle with unit mass, at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Self::with_mass(pos, F::one())
    }

    /// A pinned (zero-mass) particle.
    pub fn pinned(pos: Vec2<F>) -> Self {
        Self::with_mass(pos, F::zero())
    }

    pub fn with_mass(pos: Vec2<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            mass,
            drag_offset: Vec2::zero(),
            dragged: false,
        }
    }

    pub fn is_free(&self) -> bool {
        self.mass != F::zero()
    }

    /// Advance one frame.
    ///
    /// Gravity is scaled by the particle's own mass. Callers skip zero-mass
    /// particles; this method does not check.
    pub fn integrate(&mut self, gravity: F, damping: F) {
        let velocity = (self.pos - self.prev_pos).scale(damping);
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + Vec2::new(F::zero(), gravity * self.mass);
    }

    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Shift current and previous position together, preserving velocity.
    pub fn offset(&mut self, delta: Vec2<F>) {
        self.pos += delta;
        self.prev_pos += delta;
    }

    /// Place the particle at `pos` with zero velocity.
    pub fn reset_pos(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }
}
