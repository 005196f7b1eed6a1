//! Mapping from 2D pointer coordinates into the simulation plane.

use crate::float::Float;
use crate::mesh::Ray;
use crate::vec::Vec3;

/// Pixel viewport and the world-space rectangle it shows on the plane `z = plane_z`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    pub width_px: F,
    pub height_px: F,
    /// Visible world width at the sheet's plane.
    pub world_width: F,
    /// Visible world height at the sheet's plane.
    pub world_height: F,
    /// World point shown at the centre of the viewport.
    pub center: Vec3<F>,
}

impl<F: Float> Viewport<F> {
    pub fn new(width_px: F, height_px: F, world_width: F, world_height: F) -> Self {
        Viewport { width_px, height_px, world_width, world_height, center: Vec3::zero() }
    }

    /// Visible rectangle of a perspective camera looking down -Z at the plane
    /// `distance` units in front of it. `fov_y` is in radians.
    pub fn from_perspective(width_px: F, height_px: F, fov_y: F, distance: F, center: Vec3<F>) -> Self {
        let world_height = F::two() * distance * (fov_y * F::half()).tan();
        let world_width = world_height * (width_px / height_px);
        Viewport { width_px, height_px, world_width, world_height, center }
    }

    /// Pixel (origin top-left, y down) to normalised device coordinates in [-1, 1], y up.
    pub fn to_ndc(&self, x_px: F, y_px: F) -> (F, F) {
        let nx = x_px / self.width_px * F::two() - F::one();
        let ny = F::one() - y_px / self.height_px * F::two();
        (nx, ny)
    }

    /// Pixel to a point on the sheet's plane.
    pub fn to_world(&self, x_px: F, y_px: F) -> Vec3<F> {
        let (nx, ny) = self.to_ndc(x_px, y_px);
        Vec3::new(
            self.center.x + nx * self.world_width * F::half(),
            self.center.y + ny * self.world_height * F::half(),
            self.center.z,
        )
    }

    /// Ray from `eye` through the pixel's point on the plane.
    pub fn ray_through(&self, eye: Vec3<F>, x_px: F, y_px: F) -> Ray<F> {
        Ray::new(eye, self.to_world(x_px, y_px) - eye)
    }
}
