//! Engine observer trait for progress reporting.

use crate::stats::RunSummary;

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at phase
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait EngineObserver {
    /// Called before a phase begins. `degree` is the ride degree the phase
    /// is about to produce (`1` for singles, `2` for pairs, `3+` for
    /// extension phases).
    fn on_phase_start(&mut self, _degree: usize) {}

    /// Called after a phase completes, with the number of rides it produced.
    fn on_phase_end(&mut self, _degree: usize, _rides_produced: usize) {}

    /// Called once after the run completes, with the final rejection and
    /// routing-oracle summary.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
