//! Error types for cloth construction and host-supplied indices.

use core::fmt;

/// Errors returned when building a cloth or when a host passes bad indices.
///
/// The per-frame step never fails; numerical degeneracy is handled inside the
/// solver.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// The grid needs at least one row and one column of cells.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Width and height must be positive and finite.
    InvalidExtent,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A pick face must name three distinct particles.
    InvalidFace,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must have at least 1x1 cells (got {}x{})", rows, cols)
            }
            ClothError::InvalidExtent => write!(f, "width and height must be positive and finite"),
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            ClothError::InvalidFace => write!(f, "face must reference three distinct particles"),
        }
    }
}
