//! Tuning for the cloth simulation.

use crate::error::{ClothError, ClothResult};
use crate::float::Float;

/// Every recognized simulation option.
///
/// # Builder Pattern
/// ```
/// use drape::config::ClothConfig;
///
/// let config: ClothConfig<f64> = ClothConfig::new()
///     .with_grid(20, 30)
///     .with_stiffness(0.5)
///     .with_iterations(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float = f64> {
    /// Particle rows. Row 0 is pinned. Default: 45.
    pub rows: usize,
    /// Particle columns. Default: 45.
    pub cols: usize,
    /// Horizontal spacing between neighbours. Default: 30.
    pub tile_width: F,
    /// Vertical spacing between neighbours. Default: 15.
    pub tile_height: F,
    /// Downward acceleration per frame, scaled by particle mass. Default: 1.0.
    pub gravity: F,
    /// Air damping applied to implicit velocity, in (0, 1]. Default: 0.99.
    pub damping: F,
    /// Fraction of the ideal correction applied per pass. Default: 0.7.
    pub stiffness: F,
    /// Multiple of rest length at which a constraint tears. Default: 20.
    pub break_ratio: F,
    /// Relaxation passes per frame. Default: 10.
    pub iterations: usize,
    /// Pointer pickup radius for dragging. Default: 17.
    pub pickup_radius: F,
}

impl<F: Float> ClothConfig<F> {
    /// Create a config with the reference defaults.
    pub fn new() -> Self {
        ClothConfig {
            rows: 45,
            cols: 45,
            tile_width: F::from_f64(30.0),
            tile_height: F::from_f64(15.0),
            gravity: F::one(),
            damping: F::from_f64(0.99),
            stiffness: F::from_f64(0.7),
            break_ratio: F::from_f64(20.0),
            iterations: 10,
            pickup_radius: F::from_f64(17.0),
        }
    }

    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tile_size(mut self, width: F, height: F) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_break_ratio(mut self, break_ratio: F) -> Self {
        self.break_ratio = break_ratio;
        self
    }

    /// Set the number of relaxation passes per frame.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_pickup_radius(mut self, radius: F) -> Self {
        self.pickup_radius = radius;
        self
    }

    /// Total extent of the unstretched grid: `(cols * tile_width, rows * tile_height)`.
    pub fn grid_extent(&self) -> (F, F) {
        (
            F::from_usize(self.cols) * self.tile_width,
            F::from_usize(self.rows) * self.tile_height,
        )
    }

    /// Check every option against its allowed range.
    pub fn validate(&self) -> ClothResult<()> {
        if self.rows < 2 || self.cols < 2 {
            return Err(ClothError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        let positive = |v: F| v.is_finite() && v > F::zero();
        if !positive(self.tile_width) || !positive(self.tile_height) {
            return Err(ClothError::InvalidTileSize);
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidGravity);
        }
        if !positive(self.damping) || self.damping > F::one() {
            return Err(ClothError::InvalidDamping);
        }
        if !positive(self.stiffness) || self.stiffness > F::one() {
            return Err(ClothError::InvalidStiffness);
        }
        if !self.break_ratio.is_finite() || self.break_ratio <= F::one() {
            return Err(ClothError::InvalidBreakRatio);
        }
        if !self.pickup_radius.is_finite() || self.pickup_radius < F::zero() {
            return Err(ClothError::InvalidPickupRadius);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
