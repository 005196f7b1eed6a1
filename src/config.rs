//! Configuration types for the cloth grid, the wind perturbation and the step.

use crate::float::Float;
use crate::vec::Vec3;

/// Grid topology and physical extents of the sheet.
///
/// The sheet has `(rows + 1) * (cols + 1)` particles, centred horizontally on
/// x = 0 and vertically on `vertical_offset`, lying in the z = 0 plane.
///
/// # Builder Pattern
/// ```
/// use drape::config::GridConfig;
///
/// let grid: GridConfig<f32> = GridConfig::new(12, 20)
///     .with_extent(2.0, 3.2)
///     .with_vertical_offset(0.4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    /// Number of cells down the sheet.
    pub rows: usize,
    /// Number of cells across the sheet.
    pub cols: usize,
    pub width: F,
    pub height: F,
    pub vertical_offset: F,
    /// Uniform mass of every particle. Default: 1.0.
    pub particle_mass: F,
}

impl<F: Float> GridConfig<F> {
    /// A unit-sized sheet with the given cell counts.
    pub fn new(rows: usize, cols: usize) -> Self {
        GridConfig {
            rows,
            cols,
            width: F::one(),
            height: F::one(),
            vertical_offset: F::zero(),
            particle_mass: F::one(),
        }
    }

    pub fn with_extent(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vertical_offset(mut self, offset: F) -> Self {
        self.vertical_offset = offset;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }
}

/// Procedural "breathing" perturbation that keeps an idle sheet moving.
///
/// Per particle `i` at position `p` and elapsed time `t`:
/// `fx = sin(t * x_frequency + p.x + p.y) * x_amplitude`,
/// `fz = cos(t * z_frequency + i) * z_amplitude`.
#[derive(Clone, Debug, PartialEq)]
pub struct WindConfig<F: Float> {
    pub enabled: bool,
    pub x_amplitude: F,
    pub x_frequency: F,
    pub z_amplitude: F,
    pub z_frequency: F,
}

impl<F: Float> WindConfig<F> {
    pub fn new() -> Self {
        WindConfig {
            enabled: true,
            x_amplitude: F::from_f64(0.05),
            x_frequency: F::from_f64(2.0),
            z_amplitude: F::from_f64(0.02),
            z_frequency: F::from_f64(1.5),
        }
    }

    /// No perturbation at all.
    pub fn disabled() -> Self {
        WindConfig { enabled: false, ..Self::new() }
    }

    pub fn with_x(mut self, amplitude: F, frequency: F) -> Self {
        self.x_amplitude = amplitude;
        self.x_frequency = frequency;
        self
    }

    pub fn with_z(mut self, amplitude: F, frequency: F) -> Self {
        self.z_amplitude = amplitude;
        self.z_frequency = frequency;
        self
    }
}

impl<F: Float> Default for WindConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Step parameters for the frame driver.
///
/// # Builder Pattern
/// ```
/// use drape::config::{ClothConfig, WindConfig};
/// use drape::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_iterations(16)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_wind(WindConfig::disabled());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Gravity acceleration. Default: (0, -9.8, 0).
    pub gravity: Vec3<F>,
    /// Relaxation passes per frame. Default: 10.
    pub iterations: usize,
    /// Fixed timestep used by `Cloth::step`. Default: 0.016.
    pub timestep: F,
    /// Multiplier on the implicit velocity; 1.0 = undamped. Default: 1.0.
    pub damping: F,
    /// Constraints shorter than this are left alone for the pass. Default: 1e-6.
    pub epsilon: F,
    pub wind: WindConfig<F>,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            gravity: Vec3::from_f64(0.0, -9.8, 0.0),
            iterations: 10,
            timestep: F::from_f64(0.016),
            damping: F::one(),
            epsilon: F::from_f64(1e-6),
            wind: WindConfig::new(),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_wind(mut self, wind: WindConfig<F>) -> Self {
        self.wind = wind;
        self
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
