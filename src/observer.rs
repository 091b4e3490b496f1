//! Step observer trait for monitoring simulation progress.

use crate::float::Float;
use crate::input::InputEvent;

/// Trait for observing cloth steps.
///
/// Implement this trait to monitor a frame (debug overlays, tear effects,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver<F: Float = f64> {
    /// Called for each queued input event, after it has been applied.
    fn on_input(&mut self, _event: &InputEvent<F>) {}

    /// Called after all free particles have been integrated and clamped.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a constraint tears.
    fn on_constraint_broken(&mut self, _index: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
