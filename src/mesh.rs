//! Render-side view of the sheet: triangle topology, normals and ray picking.
//!
//! None of this runs inside the step. Hosts call it on the published
//! positions when they fill vertex buffers or resolve a pointer ray.

use crate::float::Float;
use crate::grid::Grid;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Two triangles per cell, counter-clockwise when viewed from +Z.
pub fn triangles(grid: &Grid) -> AllocVec<[usize; 3]> {
    let mut tris = AllocVec::with_capacity(2 * grid.rows() * grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let tl = grid.index(row, col);
            let tr = grid.index(row, col + 1);
            let bl = grid.index(row + 1, col);
            let br = grid.index(row + 1, col + 1);
            tris.push([tl, bl, tr]);
            tris.push([tr, bl, br]);
        }
    }
    tris
}

/// Area-weighted vertex normals.
///
/// Vertices whose adjacent faces cancel out or have no area get +Z.
pub fn vertex_normals<F: Float>(positions: &[Vec3<F>], tris: &[[usize; 3]]) -> AllocVec<Vec3<F>> {
    let mut normals = vec![Vec3::zero(); positions.len()];
    for &[a, b, c] in tris {
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    let up = Vec3::new(F::zero(), F::zero(), F::one());
    for n in normals.iter_mut() {
        let unit = n.normalize();
        *n = if unit == Vec3::zero() { up } else { unit };
    }
    normals
}

/// A pointer ray in simulation space. `direction` need not be normalised.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<F: Float> {
    pub origin: Vec3<F>,
    pub direction: Vec3<F>,
}

impl<F: Float> Ray<F> {
    pub fn new(origin: Vec3<F>, direction: Vec3<F>) -> Self {
        Ray { origin, direction }
    }

    pub fn at(&self, t: F) -> Vec3<F> {
        self.origin + self.direction.scale(t)
    }

    /// Möller-Trumbore. Returns the ray parameter of the hit; both faces count.
    pub fn intersect_triangle(&self, a: Vec3<F>, b: Vec3<F>, c: Vec3<F>) -> Option<F> {
        let eps = F::from_f32(1e-9);
        let e1 = b - a;
        let e2 = c - a;
        let p = self.direction.cross(e2);
        let det = e1.dot(p);
        if det.is_near_zero(eps) {
            return None;
        }
        let inv_det = F::one() / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if u < F::zero() || u > F::one() {
            return None;
        }
        let q = s.cross(e1);
        let v = self.direction.dot(q) * inv_det;
        if v < F::zero() || u + v > F::one() {
            return None;
        }
        let t = e2.dot(q) * inv_det;
        if t < F::zero() {
            return None;
        }
        Some(t)
    }
}

/// The closest triangle a ray hits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceHit<F: Float> {
    pub face: [usize; 3],
    pub point: Vec3<F>,
    /// Ray parameter of the hit.
    pub distance: F,
}

pub fn pick_face<F: Float>(
    positions: &[Vec3<F>],
    tris: &[[usize; 3]],
    ray: &Ray<F>,
) -> Option<FaceHit<F>> {
    let mut best: Option<FaceHit<F>> = None;
    for &face in tris {
        let [a, b, c] = face;
        if let Some(t) = ray.intersect_triangle(positions[a], positions[b], positions[c]) {
            if best.map_or(true, |hit| t < hit.distance) {
                best = Some(FaceHit { face, point: ray.at(t), distance: t });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(grid: &Grid) -> AllocVec<Vec3<f32>> {
        (0..grid.particle_count())
            .map(|i| {
                let (row, col) = grid.coords(i);
                Vec3::new(col as f32, -(row as f32), 0.0)
            })
            .collect()
    }

    #[test]
    fn two_triangles_per_cell() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(triangles(&grid).len(), 12);
    }

    #[test]
    fn flat_sheet_normals_face_viewer() {
        let grid = Grid::new(2, 2).unwrap();
        let normals = vertex_normals(&flat(&grid), &triangles(&grid));
        for n in normals {
            assert!((n.z - 1.0).abs() < 1e-6, "normal {:?}", n);
        }
    }

    #[test]
    fn ray_hits_cell_it_points_at() {
        let grid = Grid::new(2, 2).unwrap();
        let positions = flat(&grid);
        let tris = triangles(&grid);
        let ray = Ray::new(Vec3::new(1.6, -1.7, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = pick_face(&positions, &tris, &ray).expect("ray should hit the sheet");
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!((hit.point.x - 1.6).abs() < 1e-5);
        assert!(hit.face.contains(&grid.index(2, 2)) || hit.face.contains(&grid.index(1, 1)));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let grid = Grid::new(1, 1).unwrap();
        let ray = Ray::new(Vec3::new(0.5, -0.5, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(pick_face(&flat(&grid), &triangles(&grid), &ray), None);
    }
}
