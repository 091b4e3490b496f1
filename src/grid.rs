//! Rectangular cloth lattice: particles plus horizontal and vertical links.

use crate::config::ClothConfig;
use crate::constraint::DistanceConstraint;
use crate::error::{ClothError, ClothResult};
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Shape of a cloth lattice.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float = f64> {
    pub rows: usize,
    pub cols: usize,
    pub tile_width: F,
    pub tile_height: F,
    /// Position of the particle at (row 0, col 0).
    pub origin: Vec2<F>,
}

impl<F: Float> GridConfig<F> {
    /// Lattice shape from a cloth config, anchored at `origin`.
    pub fn from_cloth(config: &ClothConfig<F>, origin: Vec2<F>) -> Self {
        GridConfig {
            rows: config.rows,
            cols: config.cols,
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            origin,
        }
    }
}

/// A freshly built lattice.
///
/// Particle at (row, col) has index `row * cols + col`. Constraints are all
/// horizontal links row by row, followed by all vertical links row by row.
#[derive(Clone, Debug)]
pub struct Grid<F: Float = f64> {
    pub particles: AllocVec<Particle<F>>,
    pub constraints: AllocVec<DistanceConstraint<F>>,
    pub rows: usize,
    pub cols: usize,
}

impl<F: Float> Grid<F> {
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn horizontal_count(&self) -> usize {
        self.rows * (self.cols - 1)
    }

    pub fn vertical_count(&self) -> usize {
        (self.rows - 1) * self.cols
    }
}

/// Build the lattice described by `config`, with row 0 pinned.
pub fn build_grid<F: Float>(config: &GridConfig<F>) -> ClothResult<Grid<F>> {
    let (rows, cols) = (config.rows, config.cols);
    if rows < 2 || cols < 2 {
        return Err(ClothError::InvalidGridDimensions { rows, cols });
    }
    let positive = |v: F| v.is_finite() && v > F::zero();
    if !positive(config.tile_width) || !positive(config.tile_height) {
        return Err(ClothError::InvalidTileSize);
    }

    let mut particles = AllocVec::with_capacity(rows * cols);
    for row in 0..rows {
        let y = config.origin.y + F::from_usize(row) * config.tile_height;
        for col in 0..cols {
            let x = config.origin.x + F::from_usize(col) * config.tile_width;
            let pos = Vec2::new(x, y);
            particles.push(if row == 0 { Particle::pinned(pos) } else { Particle::new(pos) });
        }
    }

    let mut constraints = AllocVec::with_capacity(rows * (cols - 1) + (rows - 1) * cols);

    // Horizontal: (row, col) -> (row, col + 1)
    for row in 0..rows {
        for col in 0..(cols - 1) {
            let a = row * cols + col;
            constraints.push(DistanceConstraint::between(a, a + 1, &particles)?);
        }
    }

    // Vertical: (row, col) -> (row + 1, col)
    for row in 0..(rows - 1) {
        for col in 0..cols {
            let a = row * cols + col;
            constraints.push(DistanceConstraint::between(a, a + cols, &particles)?);
        }
    }

    Ok(Grid { particles, constraints, rows, cols })
}
