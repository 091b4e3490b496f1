//! Canvas bookkeeping for hosts: device sizing, centring, pointer scaling.

use crate::config::ClothConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// Result of a canvas resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange<F: Float = f64> {
    /// New simulation area, never smaller than the grid.
    pub width: F,
    pub height: F,
    /// Translation to apply to every particle so the grid stays centred.
    pub delta: Vec2<F>,
}

/// Keeps the cloth centred in a canvas of changing size.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport<F: Float = f64> {
    grid_width: F,
    grid_height: F,
    offset: Vec2<F>,
    width: F,
    height: F,
}

impl<F: Float> Viewport<F> {
    pub fn new(grid_width: F, grid_height: F) -> Self {
        Viewport {
            grid_width,
            grid_height,
            offset: Vec2::zero(),
            width: grid_width,
            height: grid_height,
        }
    }

    pub fn for_config(config: &ClothConfig<F>) -> Self {
        let (w, h) = config.grid_extent();
        Self::new(w, h)
    }

    /// Recompute the device-pixel canvas size and the centring offset.
    ///
    /// Each axis is raised to at least the grid extent, so the returned
    /// delta never pushes the grid off the top-left edge.
    pub fn resize(&mut self, css_width: F, css_height: F, device_pixel_ratio: F) -> ViewportChange<F> {
        let dpr = Self::sanitize_ratio(device_pixel_ratio);
        self.width = (css_width * dpr).max(self.grid_width);
        self.height = (css_height * dpr).max(self.grid_height);

        let offset = Vec2::new(
            ((self.width - self.grid_width) * F::half()).floor(),
            ((self.height - self.grid_height) * F::half()).floor(),
        );
        let delta = offset - self.offset;
        self.offset = offset;

        ViewportChange { width: self.width, height: self.height, delta }
    }

    /// Convert client (CSS pixel) pointer coordinates to device pixels.
    pub fn to_device(&self, client_x: F, client_y: F, device_pixel_ratio: F) -> Vec2<F> {
        Vec2::new(client_x, client_y).scale(Self::sanitize_ratio(device_pixel_ratio))
    }

    pub fn offset(&self) -> Vec2<F> {
        self.offset
    }

    pub fn size(&self) -> (F, F) {
        (self.width, self.height)
    }

    // Hosts report 0 or NaN when the ratio is unknown.
    fn sanitize_ratio(ratio: F) -> F {
        if ratio.is_finite() && ratio > F::zero() { ratio } else { F::one() }
    }
}
