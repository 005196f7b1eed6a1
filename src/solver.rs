//! Verlet integration pass and Gauss-Seidel constraint relaxation.

use crate::constraint::{DistanceConstraint, Projection};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Advance every free particle one Verlet step.
///
/// Anchored particles and the `held` particle keep their position, but every
/// particle's acceleration is cleared.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], dt: F, damping: F, held: Option<usize>) {
    for (i, p) in particles.iter_mut().enumerate() {
        if held == Some(i) {
            p.acceleration = Vec3::zero();
        } else {
            p.integrate(dt, damping);
        }
    }
}

/// Run exactly `iterations` relaxation passes over all constraints.
///
/// Each constraint sees positions already corrected earlier in the same pass.
/// There is no convergence check. A constraint whose endpoints lie closer than
/// `epsilon` is skipped for that pass and reported to the observer.
pub fn relax<F: Float, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    iterations: usize,
    epsilon: F,
    held: Option<usize>,
    observer: &mut O,
) {
    for pass in 0..iterations {
        for (ci, c) in constraints.iter().enumerate() {
            let a_fixed = particles[c.a].pinned || held == Some(c.a);
            let b_fixed = particles[c.b].pinned || held == Some(c.b);
            if a_fixed && b_fixed {
                continue;
            }
            if c.project(particles, a_fixed, b_fixed, epsilon) == Projection::Degenerate {
                observer.on_degenerate_constraint(ci);
            }
        }
        observer.on_constraint_iteration(pass);
    }
}

/// Largest absolute strain over all constraints.
pub fn max_strain<F: Float>(particles: &[Particle<F>], constraints: &[DistanceConstraint<F>]) -> F {
    constraints
        .iter()
        .map(|c| c.strain(particles).abs())
        .fold(F::zero(), |acc, s| acc.max(s))
}
