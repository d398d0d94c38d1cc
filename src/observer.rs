//! Step observer trait for monitoring physics simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this to monitor solver progress (debug overlays, profiling).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all vertices of a body have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each joint-relaxation iteration.
    fn on_joint_iteration(&mut self, _iteration: usize) {}

    /// Called when one body has finished its full step.
    fn on_body_stepped(&mut self, _body_index: usize) {}

    /// Called when a world step over all bodies is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
