use drape::{Bounds, Cloth, ClothConfig, Viewport};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Browser host for a `Cloth`: canvas sizing, pointer scaling, flat buffers
/// for a 2D-context renderer. JS calls `update()` from requestAnimationFrame.
#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    viewport: Viewport<f32>,
    device_pixel_ratio: f32,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Result<ClothDemo, JsError> {
        let config: ClothConfig<f32> = ClothConfig::default();
        let mut viewport = Viewport::for_config(&config);
        let (grid_width, grid_height) = config.grid_extent();
        let mut cloth = Cloth::new(config, Bounds::new(grid_width, grid_height)?)?;

        let change = viewport.resize(css_width, css_height, device_pixel_ratio);
        cloth.apply_viewport(&change)?;

        Ok(ClothDemo { cloth, viewport, device_pixel_ratio })
    }

    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Result<(), JsError> {
        self.device_pixel_ratio = device_pixel_ratio;
        let change = self.viewport.resize(css_width, css_height, device_pixel_ratio);
        self.cloth.apply_viewport(&change)?;
        Ok(())
    }

    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) {
        let p = self.viewport.to_device(client_x, client_y, self.device_pixel_ratio);
        self.cloth.on_pointer_down(p.x, p.y);
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let p = self.viewport.to_device(client_x, client_y, self.device_pixel_ratio);
        self.cloth.on_pointer_move(p.x, p.y);
    }

    pub fn pointer_up(&mut self) {
        self.cloth.on_pointer_up();
    }

    pub fn update(&mut self) {
        self.cloth.step();
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.cloth.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] for every unbroken constraint
    pub fn lines(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.cloth.constraint_count() * 4);
        for s in self.cloth.active_segments() {
            out.extend_from_slice(&[s.a.x, s.a.y, s.b.x, s.b.y]);
        }
        out
    }

    /// Returns [x, y, radius] while a drag is active, empty otherwise
    pub fn pointer(&self) -> Vec<f32> {
        let indicator = self.cloth.pointer();
        if indicator.active {
            vec![indicator.position.x, indicator.position.y, indicator.radius]
        } else {
            Vec::new()
        }
    }

    /// Returns [width, height] of the simulation area in device pixels
    pub fn size(&self) -> Vec<f32> {
        let (w, h) = self.viewport.size();
        vec![w, h]
    }

    pub fn broken_count(&self) -> usize {
        self.cloth.broken_count()
    }
}
