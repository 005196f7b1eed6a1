//! Verlet particles: the element type of the cloth's particle store.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass in the sheet. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    /// Frame-local; cleared by every integration pass.
    pub acceleration: Vec3<F>,
    pub mass: F,
    pub inv_mass: F,
    /// Anchored particles are never moved by forces, integration or relaxation.
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec3<F>, mass: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::zero(),
            mass,
            inv_mass,
            pinned: false,
        }
    }

    /// An anchored particle. Keeps its mass so it can report it, but never moves.
    pub fn anchored(pos: Vec3<F>, mass: F) -> Self {
        Particle { pinned: true, ..Particle::new(pos, mass) }
    }

    /// Accumulate a force; converted to acceleration through the inverse mass.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        if !self.pinned {
            self.acceleration += force.scale(self.inv_mass);
        }
    }

    pub fn apply_acceleration(&mut self, accel: Vec3<F>) {
        if !self.pinned {
            self.acceleration += accel;
        }
    }

    /// One Verlet step. `damping` multiplies the implicit velocity (1.0 = none).
    ///
    /// The acceleration is cleared even when the particle is pinned, so forces
    /// never carry over into the next frame.
    pub fn integrate(&mut self, dt: F, damping: F) {
        if !self.pinned {
            self.advance(dt, damping);
        }
        self.acceleration = Vec3::zero();
    }

    pub(crate) fn advance(&mut self, dt: F, damping: F) {
        let velocity = (self.pos - self.prev_pos).scale(damping);
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + self.acceleration.scale(dt * dt);
    }

    /// Teleport with zero implicit velocity.
    pub fn hold_at(&mut self, pos: Vec3<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Per-step displacement, `pos - prev_pos`.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_clears_acceleration() {
        let mut p = Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0);
        p.apply_acceleration(Vec3::new(0.0, -9.8, 0.0));
        p.integrate(0.016, 1.0);
        assert_eq!(p.acceleration, Vec3::zero());
        assert!(p.pos.y < 0.0);
    }

    #[test]
    fn anchored_ignores_forces() {
        let mut p = Particle::anchored(Vec3::new(1.0f32, 2.0, 0.0), 1.0);
        p.apply_force(Vec3::new(100.0, 100.0, 100.0));
        p.integrate(0.016, 1.0);
        assert_eq!(p.pos, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(p.mass, 1.0);
    }

    #[test]
    fn hold_at_zeroes_velocity() {
        let mut p = Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0);
        p.prev_pos = Vec3::new(-1.0, 0.0, 0.0);
        p.hold_at(Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(p.velocity_raw(), Vec3::zero());
    }
}
