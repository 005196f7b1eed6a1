//! Verlet cloth for a grabbable, wind-swayed sheet.
//!
//! `drape` simulates a rectangular sheet hanging from its top edge: a grid of
//! Verlet particles held together by structural and shear distance
//! constraints, pushed by gravity and a procedural wind, and relaxed by a
//! fixed number of Gauss-Seidel passes per frame. A pointer can grab the
//! nearest particle of a picked face and drag it until release.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Fixed-budget solver**: Two-sided distance constraints, degenerate-safe
//! - **Procedural wind**: Deterministic, driven by elapsed time and position
//! - **Grab/release**: Nearest-vertex picking, zero inherited velocity on release
//! - **Render helpers**: Triangle indices, vertex normals, ray picking, viewport mapping
//! - **Observable**: Monitor each stage of the step via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drape::{Cloth, ClothConfig, GridConfig, NoOpStepObserver, Vec3};
//!
//! let grid = GridConfig::new(8, 12).with_extent(2.0f32, 1.2);
//! let mut cloth = Cloth::new(&grid, ClothConfig::new()).unwrap();
//!
//! let face = cloth.triangles()[40];
//! cloth.grab(Vec3::new(0.1, -0.2, 0.0), face).unwrap();
//! for frame in 0..60 {
//!     cloth.step(frame as f32 * 0.016, &mut NoOpStepObserver);
//! }
//! cloth.release();
//! assert_eq!(cloth.positions().len(), 9 * 13);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod grid;
pub mod force;
pub mod solver;
pub mod interaction;
pub mod mesh;
pub mod viewport;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, LinkKind, Projection};
pub use grid::Grid;
pub use interaction::{GrabState, InteractionController};
pub use mesh::{FaceHit, Ray};
pub use viewport::Viewport;
pub use cloth::Cloth;
pub use config::{ClothConfig, GridConfig, WindConfig};
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver, StepStats};
pub use error::ClothError;
