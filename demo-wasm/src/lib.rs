use drape::{Cloth, ClothConfig, GridConfig, NoOpStepObserver, Vec3, Viewport};
use wasm_bindgen::prelude::*;

// ---- Ticket Demo ----

/// A swaying ticket the page can grab with the pointer.
///
/// The page calls `update` once per animation frame, then copies
/// `positions` / `normals` into its vertex buffers. Pointer handlers only
/// record input; it is applied at the start of the next `update`.
#[wasm_bindgen]
pub struct TicketDemo {
    cloth: Cloth<f32>,
    viewport: Viewport<f32>,
    eye: Vec3<f32>,
    elapsed: f32,
}

#[wasm_bindgen]
impl TicketDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, width: f32, height: f32) -> Result<TicketDemo, JsValue> {
        let grid = GridConfig::new(rows, cols)
            .with_extent(width, height)
            .with_vertical_offset(height * 0.15);
        let cloth = Cloth::new(&grid, ClothConfig::new()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let eye = Vec3::new(0.0, 0.0, 5.0);
        Ok(TicketDemo {
            cloth,
            viewport: Viewport::from_perspective(800.0, 600.0, 45f32.to_radians(), eye.z, Vec3::zero()),
            eye,
            elapsed: 0.0,
        })
    }

    /// Match the canvas size and camera (vertical field of view in degrees).
    pub fn set_viewport(&mut self, width_px: f32, height_px: f32, fov_y_deg: f32) {
        self.viewport = Viewport::from_perspective(
            width_px,
            height_px,
            fov_y_deg.to_radians(),
            self.eye.z,
            Vec3::zero(),
        );
    }

    pub fn update(&mut self) {
        self.cloth.step(self.elapsed, &mut NoOpStepObserver);
        self.elapsed += self.cloth.config().timestep;
    }

    /// Returns true when the pointer landed on the ticket.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let ray = self.viewport.ray_through(self.eye, x, y);
        matches!(self.cloth.grab_ray(&ray), Ok(Some(_)))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let target = self.viewport.to_world(x, y);
        self.cloth.move_pointer(target);
    }

    pub fn pointer_up(&mut self) {
        self.cloth.release();
    }

    pub fn set_wind(&mut self, enabled: bool) {
        self.cloth.config_mut().wind.enabled = enabled;
    }

    pub fn reset(&mut self) {
        self.cloth.reset();
        self.elapsed = 0.0;
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.positions_flat()
    }

    /// Returns flat per-vertex normals matching `positions`
    pub fn normals(&self) -> Vec<f32> {
        let normals = self.cloth.normals();
        let mut out = Vec::with_capacity(normals.len() * 3);
        for n in &normals {
            out.push(n.x);
            out.push(n.y);
            out.push(n.z);
        }
        out
    }

    /// Triangle index buffer (three indices per face)
    pub fn indices(&self) -> Vec<u32> {
        self.cloth.triangles().iter().flatten().map(|&i| i as u32).collect()
    }

    pub fn particle_count(&self) -> usize {
        self.cloth.particle_count()
    }

    pub fn is_grabbing(&self) -> bool {
        self.cloth.interaction().is_grabbing()
    }
}
