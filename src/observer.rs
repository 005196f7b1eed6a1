//! Step observers for monitoring the frame pipeline.

/// Hooks called by `Cloth::step` in pipeline order.
///
/// All methods have default no-op implementations. Useful for debugging,
/// profiling, and counting solver degeneracies without touching the step.
pub trait StepObserver {
    /// The grabbed particle was moved to the pointer.
    fn on_grab_override(&mut self, _particle: usize) {}

    /// Gravity and wind have been accumulated.
    fn on_forces(&mut self) {}

    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// A constraint was skipped because its endpoints coincide.
    fn on_degenerate_constraint(&mut self, _constraint: usize) {}

    /// Called after each relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running counters over any number of steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub passes: usize,
    pub degenerate_skips: usize,
    pub grab_overrides: usize,
}

impl StepObserver for StepStats {
    fn on_grab_override(&mut self, _particle: usize) {
        self.grab_overrides += 1;
    }

    fn on_degenerate_constraint(&mut self, _constraint: usize) {
        self.degenerate_skips += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.passes += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

/// Forwards every hook to `log::trace!` under the `drape::step` target.
#[derive(Clone, Debug, Default)]
pub struct LogStepObserver {
    frame: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        LogStepObserver { frame: 0 }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl StepObserver for LogStepObserver {
    fn on_grab_override(&mut self, particle: usize) {
        log::trace!(target: "drape::step", "frame {}: particle {} held at pointer", self.frame, particle);
    }

    fn on_degenerate_constraint(&mut self, constraint: usize) {
        log::trace!(target: "drape::step", "frame {}: constraint {} degenerate, skipped", self.frame, constraint);
    }

    fn on_step_complete(&mut self) {
        log::trace!(target: "drape::step", "frame {} complete", self.frame);
        self.frame += 1;
    }
}
