//! The cloth sheet and its per-frame step.

use crate::config::{ClothConfig, GridConfig};
use crate::constraint::DistanceConstraint;
use crate::error::ClothError;
use crate::float::Float;
use crate::force;
use crate::grid::Grid;
use crate::interaction::InteractionController;
use crate::mesh::{self, Ray};
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::solver;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A hanging sheet of Verlet particles, anchored along its top edge.
///
/// Topology is fixed at construction. `step` is the only writer of particle
/// state; pointer input goes through [`Cloth::interaction_mut`] (or the grab
/// helpers) and takes effect at the start of the next step.
pub struct Cloth<F: Float> {
    grid: Grid,
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    initial: AllocVec<Particle<F>>,
    triangles: AllocVec<[usize; 3]>,
    positions: AllocVec<Vec3<F>>,
    interaction: InteractionController<F>,
    config: ClothConfig<F>,
}

impl<F: Float> Cloth<F> {
    pub fn new(grid_config: &GridConfig<F>, config: ClothConfig<F>) -> Result<Self, ClothError> {
        let grid = Grid::new(grid_config.rows, grid_config.cols)?;
        let particles = grid.build_particles(grid_config)?;
        let constraints = grid.build_constraints(&particles);
        let triangles = mesh::triangles(&grid);
        let positions = particles.iter().map(|p| p.pos).collect();

        log::debug!(
            "cloth built: {}x{} cells, {} particles, {} constraints",
            grid.rows(),
            grid.cols(),
            particles.len(),
            constraints.len()
        );

        Ok(Cloth {
            grid,
            initial: particles.clone(),
            particles,
            constraints,
            triangles,
            positions,
            interaction: InteractionController::new(),
            config,
        })
    }

    /// Advance one frame with the configured fixed timestep.
    pub fn step<O: StepObserver>(&mut self, elapsed: F, observer: &mut O) {
        let dt = self.config.timestep;
        self.step_with_dt(elapsed, dt, observer);
    }

    /// Advance one frame: grab override, forces, integration, relaxation, publish.
    ///
    /// The order is fixed. Overriding after integration would lag the pointer
    /// by a frame, and relaxing before integration would correct stale positions.
    pub fn step_with_dt<O: StepObserver>(&mut self, elapsed: F, dt: F, observer: &mut O) {
        let held = self.interaction.grabbed();

        if let (Some(index), Some(target)) = (held, self.interaction.target()) {
            self.particles[index].hold_at(target);
            observer.on_grab_override(index);
        }

        force::accumulate(&mut self.particles, self.config.gravity, &self.config.wind, elapsed, held);
        observer.on_forces();

        solver::integrate(&mut self.particles, dt, self.config.damping, held);
        observer.on_integrate();

        solver::relax(
            &mut self.particles,
            &self.constraints,
            self.config.iterations,
            self.config.epsilon,
            held,
            observer,
        );

        for (out, p) in self.positions.iter_mut().zip(self.particles.iter()) {
            *out = p.pos;
        }
        observer.on_step_complete();
    }

    /// Positions published by the last step, index order `row * (cols + 1) + col`.
    pub fn positions(&self) -> &[Vec3<F>] {
        &self.positions
    }

    /// Write `x, y, z` triples into `out`, which must hold `3 * particle_count()` values.
    pub fn write_positions(&self, out: &mut [F]) {
        for (chunk, p) in out.chunks_exact_mut(3).zip(self.positions.iter()) {
            chunk[0] = p.x;
            chunk[1] = p.y;
            chunk[2] = p.z;
        }
    }

    pub fn positions_flat(&self) -> AllocVec<F> {
        let mut out = alloc::vec![F::zero(); self.positions.len() * 3];
        self.write_positions(&mut out);
        out
    }

    /// Render normals for the last published positions.
    pub fn normals(&self) -> AllocVec<Vec3<F>> {
        mesh::vertex_normals(&self.positions, &self.triangles)
    }

    /// Nearest of the three face vertices to `point`; grab state is untouched.
    pub fn pick(&self, point: Vec3<F>, face: [usize; 3]) -> Result<usize, ClothError> {
        InteractionController::pick_nearest(point, face, &self.particles)
    }

    /// Pick the nearest face vertex and hold it at `point`.
    ///
    /// Replaces any grab already in progress.
    pub fn grab(&mut self, point: Vec3<F>, face: [usize; 3]) -> Result<usize, ClothError> {
        let index = self.pick(point, face)?;
        self.interaction.begin_grab(index, point);
        Ok(index)
    }

    /// Hold a particle by index at its current position.
    pub fn grab_index(&mut self, index: usize) -> Result<(), ClothError> {
        let count = self.particles.len();
        let particle = self.particles.get(index).ok_or(ClothError::ParticleOutOfBounds { index, count })?;
        self.interaction.begin_grab(index, particle.pos);
        Ok(())
    }

    /// Cast `ray` at the sheet and grab where it lands. `Ok(None)` on a miss.
    pub fn grab_ray(&mut self, ray: &Ray<F>) -> Result<Option<usize>, ClothError> {
        match mesh::pick_face(&self.positions, &self.triangles, ray) {
            Some(hit) => self.grab(hit.point, hit.face).map(Some),
            None => Ok(None),
        }
    }

    /// Move the held point. Takes effect on the next step.
    pub fn move_pointer(&mut self, target: Vec3<F>) {
        self.interaction.move_pointer(target);
    }

    pub fn release(&mut self) -> Option<usize> {
        self.interaction.release()
    }

    pub fn interaction(&self) -> &InteractionController<F> {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionController<F> {
        &mut self.interaction
    }

    /// Back to the rest configuration; any grab is dropped.
    pub fn reset(&mut self) {
        self.particles.clone_from(&self.initial);
        for (out, p) in self.positions.iter_mut().zip(self.particles.iter()) {
            *out = p.pos;
        }
        self.interaction.release();
    }

    /// Largest relative deviation of any constraint from its rest length.
    pub fn max_strain(&self) -> F {
        solver::max_strain(&self.particles, &self.constraints)
    }

    pub fn index(&self, row: usize, col: usize) -> usize { self.grid.index(row, col) }
    pub fn position_at(&self, row: usize, col: usize) -> Vec3<F> { self.positions[self.index(row, col)] }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn triangles(&self) -> &[[usize; 3]] { &self.triangles }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut ClothConfig<F> { &mut self.config }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
