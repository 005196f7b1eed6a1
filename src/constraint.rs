//! Pairwise distance constraints between cloth particles.

use crate::float::Float;
use crate::particle::Particle;

/// Which part of the grid topology a link belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Horizontal or vertical neighbour.
    Structural,
    /// Cell diagonal.
    Shear,
}

/// Outcome of projecting one constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    Applied,
    /// Endpoints (nearly) coincide; nothing was moved.
    Degenerate,
}

/// Two-sided distance constraint: resists both stretch and compression.
///
/// Endpoints are plain indices into the particle array; the rest length is
/// fixed once the constraint exists.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub kind: LinkKind,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F, kind: LinkKind) -> Self {
        DistanceConstraint { a, b, rest_length, kind }
    }

    /// Rest length taken from the particles' current positions.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], kind: LinkKind) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        DistanceConstraint { a, b, rest_length, kind }
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// `(current - rest) / rest`; zero for a zero rest length.
    pub fn strain(&self, particles: &[Particle<F>]) -> F {
        if self.rest_length.is_near_zero(F::from_f32(1e-12)) {
            return F::zero();
        }
        (self.current_length(particles) - self.rest_length) / self.rest_length
    }

    /// Move both endpoints half the length error toward the rest length.
    ///
    /// A fixed endpoint keeps its position and its half of the correction is
    /// dropped, so a link to an anchor closes only half its error per pass.
    pub(crate) fn project(
        &self,
        particles: &mut [Particle<F>],
        a_fixed: bool,
        b_fixed: bool,
        epsilon: F,
    ) -> Projection {
        let delta = particles[self.a].pos - particles[self.b].pos;
        let length = delta.length();
        if length < epsilon || !length.is_finite() {
            return Projection::Degenerate;
        }

        let error = (length - self.rest_length) / length;
        let correction = delta.scale(error * F::half());

        if !a_fixed {
            particles[self.a].pos -= correction;
        }
        if !b_fixed {
            particles[self.b].pos += correction;
        }
        Projection::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    fn pair(a: Vec3<f32>, b: Vec3<f32>) -> [Particle<f32>; 2] {
        [Particle::new(a, 1.0), Particle::new(b, 1.0)]
    }

    #[test]
    fn stretched_link_pulls_both_ends_in() {
        let mut ps = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        let c = DistanceConstraint::new(0, 1, 2.0, LinkKind::Structural);
        assert_eq!(c.project(&mut ps, false, false, 1e-6), Projection::Applied);
        assert!((ps[0].pos.x - 1.0).abs() < 1e-6);
        assert!((ps[1].pos.x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn compressed_link_pushes_apart() {
        let mut ps = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let c = DistanceConstraint::new(0, 1, 2.0, LinkKind::Shear);
        c.project(&mut ps, false, false, 1e-6);
        assert!((c.current_length(&ps) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pinned_end_keeps_position_and_half_correction_is_dropped() {
        let mut ps = pair(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -4.0, 0.0));
        let c = DistanceConstraint::new(0, 1, 2.0, LinkKind::Structural);
        c.project(&mut ps, true, false, 1e-6);
        assert_eq!(ps[0].pos, Vec3::zero());
        assert!((ps[1].pos.y + 3.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let mut ps = pair(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        let c = DistanceConstraint::new(0, 1, 0.5, LinkKind::Structural);
        assert_eq!(c.project(&mut ps, false, false, 1e-6), Projection::Degenerate);
        assert!(ps[0].pos.is_finite() && ps[1].pos.is_finite());
    }
}
