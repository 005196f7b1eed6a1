//! Pointer grab/release state for the sheet.
//!
//! The controller only records input: which particle is grabbed and where the
//! pointer is. The frame driver reads it at the start of every step and is the
//! only writer of particle state.

use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Either nothing is held, or exactly one particle follows the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GrabState<F: Float> {
    Idle,
    Grabbing { particle: usize, target: Vec3<F> },
}

/// Tracks the grabbed particle and the latest pointer sample.
///
/// A pick while already grabbing replaces the grab; the previous particle is
/// released exactly as if `release` had been called first.
#[derive(Clone, Debug)]
pub struct InteractionController<F: Float> {
    state: GrabState<F>,
    pointer: Option<Vec3<F>>,
}

impl<F: Float> InteractionController<F> {
    pub fn new() -> Self {
        InteractionController { state: GrabState::Idle, pointer: None }
    }

    pub fn state(&self) -> GrabState<F> {
        self.state
    }

    pub fn is_grabbing(&self) -> bool {
        matches!(self.state, GrabState::Grabbing { .. })
    }

    /// Index of the grabbed particle, if any.
    pub fn grabbed(&self) -> Option<usize> {
        match self.state {
            GrabState::Grabbing { particle, .. } => Some(particle),
            GrabState::Idle => None,
        }
    }

    /// Where the grabbed particle will be held on the next step.
    pub fn target(&self) -> Option<Vec3<F>> {
        match self.state {
            GrabState::Grabbing { target, .. } => Some(target),
            GrabState::Idle => None,
        }
    }

    /// Latest pointer sample, grabbing or not.
    pub fn pointer(&self) -> Option<Vec3<F>> {
        self.pointer
    }

    /// Nearest of the three face vertices to `point`.
    ///
    /// Ties resolve to the earliest vertex in `face`. Reads positions only.
    pub fn pick_nearest(
        point: Vec3<F>,
        face: [usize; 3],
        particles: &[Particle<F>],
    ) -> Result<usize, ClothError> {
        let count = particles.len();
        for &index in face.iter() {
            if index >= count {
                return Err(ClothError::ParticleOutOfBounds { index, count });
            }
        }
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(ClothError::InvalidFace);
        }

        let mut best = face[0];
        let mut best_dist = particles[best].pos.distance_sq(point);
        for &index in face[1..].iter() {
            let d = particles[index].pos.distance_sq(point);
            if d < best_dist {
                best = index;
                best_dist = d;
            }
        }
        Ok(best)
    }

    /// Start holding `particle` at `target`. Returns the particle it replaced.
    pub fn begin_grab(&mut self, particle: usize, target: Vec3<F>) -> Option<usize> {
        let replaced = self.grabbed();
        match replaced {
            Some(previous) if previous != particle => {
                log::trace!("grab replaced: particle {} -> {}", previous, particle);
            }
            Some(_) => {}
            None => log::trace!("grab started: particle {}", particle),
        }
        self.state = GrabState::Grabbing { particle, target };
        self.pointer = Some(target);
        replaced
    }

    /// Record a new pointer position in simulation space.
    pub fn move_pointer(&mut self, target: Vec3<F>) {
        self.pointer = Some(target);
        if let GrabState::Grabbing { particle, .. } = self.state {
            self.state = GrabState::Grabbing { particle, target };
        }
    }

    /// Stop holding. Returns the particle that was released, if any.
    pub fn release(&mut self) -> Option<usize> {
        let released = self.grabbed();
        if let Some(particle) = released {
            log::trace!("grab released: particle {}", particle);
        }
        self.state = GrabState::Idle;
        released
    }
}

impl<F: Float> Default for InteractionController<F> {
    fn default() -> Self {
        Self::new()
    }
}
