//! Grid layout of the sheet: particle placement and constraint generation.

use crate::config::GridConfig;
use crate::constraint::{DistanceConstraint, LinkKind};
use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Cell counts of a sheet and the row-major index mapping of its particles.
///
/// Particle at (row, col) has index `row * (cols + 1) + col`, with row 0 the
/// top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ClothError> {
        if rows == 0 || cols == 0 {
            return Err(ClothError::InvalidGridDimensions { rows, cols });
        }
        Ok(Grid { rows, cols })
    }

    /// Cells down the sheet.
    pub fn rows(&self) -> usize { self.rows }
    /// Cells across the sheet.
    pub fn cols(&self) -> usize { self.cols }
    /// Particles per row.
    pub fn stride(&self) -> usize { self.cols + 1 }
    pub fn particle_count(&self) -> usize { (self.rows + 1) * (self.cols + 1) }

    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row <= self.rows && col <= self.cols);
        row * self.stride() + col
    }

    /// Inverse of [`Grid::index`].
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.stride(), index % self.stride())
    }

    /// Horizontal + vertical links and both diagonals of every cell.
    pub fn constraint_count(&self) -> usize {
        let horizontal = (self.rows + 1) * self.cols;
        let vertical = self.rows * (self.cols + 1);
        let shear = 2 * self.rows * self.cols;
        horizontal + vertical + shear
    }

    /// Lay the particles out over `width x height`, top row anchored.
    pub fn build_particles<F: Float>(
        &self,
        config: &GridConfig<F>,
    ) -> Result<AllocVec<Particle<F>>, ClothError> {
        let positive_finite = |v: F| v.is_finite() && v > F::zero();
        if !positive_finite(config.width) || !positive_finite(config.height) {
            return Err(ClothError::InvalidExtent);
        }
        if !config.vertical_offset.is_finite() {
            return Err(ClothError::InvalidExtent);
        }
        if !positive_finite(config.particle_mass) {
            return Err(ClothError::InvalidMass);
        }

        let cols = F::from_usize(self.cols);
        let rows = F::from_usize(self.rows);
        let mut particles = AllocVec::with_capacity(self.particle_count());

        for row in 0..=self.rows {
            for col in 0..=self.cols {
                let x = (F::from_usize(col) / cols - F::half()) * config.width;
                let y = (F::half() - F::from_usize(row) / rows) * config.height
                    + config.vertical_offset;
                let pos = Vec3::new(x, y, F::zero());
                particles.push(if row == 0 {
                    Particle::anchored(pos, config.particle_mass)
                } else {
                    Particle::new(pos, config.particle_mass)
                });
            }
        }

        Ok(particles)
    }

    /// Generate every link once, rest lengths measured from `particles`.
    pub fn build_constraints<F: Float>(
        &self,
        particles: &[Particle<F>],
    ) -> AllocVec<DistanceConstraint<F>> {
        let mut constraints = AllocVec::with_capacity(self.constraint_count());

        // Structural: horizontal
        for row in 0..=self.rows {
            for col in 0..self.cols {
                let a = self.index(row, col);
                let b = self.index(row, col + 1);
                constraints.push(DistanceConstraint::from_particles(a, b, particles, LinkKind::Structural));
            }
        }

        // Structural: vertical
        for row in 0..self.rows {
            for col in 0..=self.cols {
                let a = self.index(row, col);
                let b = self.index(row + 1, col);
                constraints.push(DistanceConstraint::from_particles(a, b, particles, LinkKind::Structural));
            }
        }

        // Shear: both diagonals
        for row in 0..self.rows {
            for col in 0..self.cols {
                let tl = self.index(row, col);
                let tr = self.index(row, col + 1);
                let bl = self.index(row + 1, col);
                let br = self.index(row + 1, col + 1);
                constraints.push(DistanceConstraint::from_particles(tl, br, particles, LinkKind::Shear));
                constraints.push(DistanceConstraint::from_particles(tr, bl, particles, LinkKind::Shear));
            }
        }

        constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GridConfig<f32> {
        GridConfig::new(3, 4).with_extent(2.0, 3.0).with_vertical_offset(0.5)
    }

    #[test]
    fn correct_particle_count() {
        let grid = Grid::new(3, 4).unwrap();
        let particles = grid.build_particles(&test_config()).unwrap();
        assert_eq!(particles.len(), 20); // 4 * 5
    }

    #[test]
    fn constraint_count_matches_topology() {
        let grid = Grid::new(3, 4).unwrap();
        let particles = grid.build_particles(&test_config()).unwrap();
        let constraints = grid.build_constraints(&particles);
        // Horizontal: 4*4 = 16
        // Vertical: 3*5 = 15
        // Shear: 3*4*2 = 24
        assert_eq!(constraints.len(), 55);
        assert_eq!(grid.constraint_count(), 55);
        let shear = constraints.iter().filter(|c| c.kind == LinkKind::Shear).count();
        assert_eq!(shear, 24);
    }

    #[test]
    fn corners_span_the_extent() {
        let grid = Grid::new(3, 4).unwrap();
        let particles = grid.build_particles(&test_config()).unwrap();
        let top_left = particles[grid.index(0, 0)].pos;
        let bottom_right = particles[grid.index(3, 4)].pos;
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 2.0).abs() < 1e-6);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn only_top_row_is_anchored() {
        let grid = Grid::new(2, 2).unwrap();
        let particles = grid.build_particles(&GridConfig::<f32>::new(2, 2)).unwrap();
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.pinned, grid.coords(i).0 == 0, "particle {}", i);
        }
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Grid::new(0, 3), Err(ClothError::InvalidGridDimensions { rows: 0, cols: 3 }));
    }

    #[test]
    fn rejects_bad_extent_and_mass() {
        let grid = Grid::new(1, 1).unwrap();
        let flat = GridConfig::<f32>::new(1, 1).with_extent(1.0, 0.0);
        assert_eq!(grid.build_particles(&flat), Err(ClothError::InvalidExtent));
        let weightless = GridConfig::<f32>::new(1, 1).with_particle_mass(0.0);
        assert_eq!(grid.build_particles(&weightless), Err(ClothError::InvalidMass));
    }
}
