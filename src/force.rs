//! Force accumulation: gravity plus the procedural wind perturbation.

use crate::config::WindConfig;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Wind force on particle `index` at `pos` and elapsed time `t`.
///
/// A pure function of its inputs, so replaying the same frames reproduces
/// the same motion.
pub fn wind_force<F: Float>(wind: &WindConfig<F>, t: F, index: usize, pos: Vec3<F>) -> Vec3<F> {
    if !wind.enabled {
        return Vec3::zero();
    }
    let fx = (t * wind.x_frequency + pos.x + pos.y).sin() * wind.x_amplitude;
    let fz = (t * wind.z_frequency + F::from_usize(index)).cos() * wind.z_amplitude;
    Vec3::new(fx, F::zero(), fz)
}

/// Add gravity and wind to every free particle's acceleration.
///
/// Anchored particles and the `held` particle receive nothing. Gravity is
/// applied as the force `gravity * mass`, so the resulting acceleration is
/// `gravity` whatever the mass; wind is a force and is divided by mass.
pub fn accumulate<F: Float>(
    particles: &mut [Particle<F>],
    gravity: Vec3<F>,
    wind: &WindConfig<F>,
    t: F,
    held: Option<usize>,
) {
    for (i, p) in particles.iter_mut().enumerate() {
        if p.pinned || held == Some(i) {
            continue;
        }
        let weight = gravity.scale(p.mass);
        let gust = wind_force(wind, t, i, p.pos);
        p.apply_force(weight + gust);
    }
}
