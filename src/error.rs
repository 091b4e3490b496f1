//! Error types for cloth construction.

use thiserror::Error;

/// Errors raised while building a cloth or validating its configuration.
///
/// Stepping the simulation never fails; every variant here is a
/// construction-time precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// Grid must be at least 2x2.
    #[error("grid must be at least 2x2 (got {rows}x{cols})")]
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Tile width and height must be positive and finite.
    #[error("tile width and height must be positive and finite")]
    InvalidTileSize,
    /// Damping must be in (0, 1].
    #[error("damping must be in (0, 1]")]
    InvalidDamping,
    /// Stiffness must be in (0, 1].
    #[error("stiffness must be in (0, 1]")]
    InvalidStiffness,
    /// Break ratio must be finite and greater than 1.
    #[error("break ratio must be finite and greater than 1")]
    InvalidBreakRatio,
    /// Gravity must be finite.
    #[error("gravity must be finite")]
    InvalidGravity,
    /// Pickup radius must be finite and non-negative.
    #[error("pickup radius must be finite and non-negative")]
    InvalidPickupRadius,
    /// Simulation area must be positive and finite.
    #[error("bounds must be positive and finite")]
    InvalidBounds,
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// A constraint joins a particle to itself.
    #[error("constraint endpoints must be distinct (both are {index})")]
    SelfConstraint { index: usize },
    /// Endpoints coincide, so there is no rest length to hold.
    #[error("particles {a} and {b} coincide; rest length would be zero")]
    DegenerateRestLength { a: usize, b: usize },
}

/// Result type for cloth construction.
pub type ClothResult<T> = core::result::Result<T, ClothError>;
