//! Breakable distance constraints between two particles.

use crate::error::{ClothError, ClothResult};
use crate::float::Float;
use crate::particle::Particle;

/// What a single [`DistanceConstraint::resolve`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Endpoints were pushed toward the rest length.
    Corrected,
    /// Endpoints were (nearly) coincident; nothing to correct along.
    Degenerate,
    /// Separation exceeded the break threshold; the constraint tore this call.
    Broke,
    /// Already broken; never touches particles again.
    Inert,
}

/// Holds particles `a` and `b` at `rest_length`, until stretched past
/// `rest_length * break_ratio`.
///
/// Endpoints are indices into the particle arena; the constraint never owns
/// particles.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float = f64> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub broken: bool,
}

impl<F: Float> DistanceConstraint<F> {
    /// Constrain `a` and `b` to their current separation.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> ClothResult<Self> {
        let count = particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(ClothError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(ClothError::SelfConstraint { index: a });
        }
        let rest_length = particles[a].pos.distance(particles[b].pos);
        if !rest_length.is_finite() || rest_length <= F::zero() {
            return Err(ClothError::DegenerateRestLength { a, b });
        }
        Ok(DistanceConstraint { a, b, rest_length, broken: false })
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Current separation of the endpoints.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// One relaxation pass.
    ///
    /// The correction is weighted by each endpoint's mass, so a zero-mass
    /// endpoint stays put and the other one takes the whole offset.
    pub fn resolve(&mut self, particles: &mut [Particle<F>], stiffness: F, break_ratio: F) -> Resolution {
        if self.broken {
            return Resolution::Inert;
        }

        let diff = particles[self.a].pos - particles[self.b].pos;
        let length = diff.length();
        if length > self.rest_length * break_ratio {
            self.broken = true;
            return Resolution::Broke;
        }
        if length.is_near_zero(F::from_f64(1e-10)) {
            return Resolution::Degenerate;
        }

        let k = (self.rest_length - length) / length;
        let offset = diff.scale(k * stiffness);

        let a_mass = particles[self.a].mass;
        let b_mass = particles[self.b].mass;
        if a_mass != F::zero() {
            particles[self.a].pos += offset.scale(a_mass);
        }
        if b_mass != F::zero() {
            particles[self.b].pos -= offset.scale(b_mass);
        }
        Resolution::Corrected
    }
}
