//! Step observer trait for monitoring cloth simulation progress.

/// Trait for observing cloth simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// counting tears, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated and clamped.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when the cut stroke removes the link between `p1` and `p2`.
    fn on_link_cut(&mut self, _p1: usize, _p2: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
