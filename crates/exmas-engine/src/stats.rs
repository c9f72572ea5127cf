//! Local-recovery rejection tracking.
//!
//! `InfeasibleRequest` and `ConfigurationError` are the only fatal errors
//! (see [`crate::EngineError`]); every other rejection here is counted, never
//! propagated — local recoveries never bubble up as an `Err`.

use std::sync::atomic::{AtomicU64, Ordering};

/// A candidate ride's reason for rejection, tracked but not propagated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    /// A routing query resolved to the unreachable sentinel.
    UnreachableLeg,
    /// Per-passenger travel time or delay fell outside its window.
    WindowViolation,
    /// `remainingBudget < 0` for some passenger.
    BudgetViolation,
    /// The same `paxId` would appear twice in the candidate ride.
    DuplicatePassenger,
    /// The routing or scoring oracle panicked for a specific query.
    OracleFailure,
}

/// Atomic counters for routing attempts/failures and per-reason rejections.
///
/// Shared by reference across worker threads; every increment is
/// independent, so no ordering beyond `Relaxed` is required.
#[derive(Default)]
pub struct RejectionCounters {
    unreachable_leg: AtomicU64,
    window_violation: AtomicU64,
    budget_violation: AtomicU64,
    duplicate_passenger: AtomicU64,
    oracle_failure: AtomicU64,
}

impl RejectionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, reason: RejectionReason) {
        let counter = match reason {
            RejectionReason::UnreachableLeg => &self.unreachable_leg,
            RejectionReason::WindowViolation => &self.window_violation,
            RejectionReason::BudgetViolation => &self.budget_violation,
            RejectionReason::DuplicatePassenger => &self.duplicate_passenger,
            RejectionReason::OracleFailure => &self.oracle_failure,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, reason: RejectionReason) -> u64 {
        let counter = match reason {
            RejectionReason::UnreachableLeg => &self.unreachable_leg,
            RejectionReason::WindowViolation => &self.window_violation,
            RejectionReason::BudgetViolation => &self.budget_violation,
            RejectionReason::DuplicatePassenger => &self.duplicate_passenger,
            RejectionReason::OracleFailure => &self.oracle_failure,
        };
        counter.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.unreachable_leg.load(Ordering::Relaxed)
            + self.window_violation.load(Ordering::Relaxed)
            + self.budget_violation.load(Ordering::Relaxed)
            + self.duplicate_passenger.load(Ordering::Relaxed)
            + self.oracle_failure.load(Ordering::Relaxed)
    }
}

/// Final run summary: total routing attempts, failures, success rate, and
/// counts by rejection reason.
#[derive(Copy, Clone, Debug)]
pub struct RunSummary {
    pub routing_attempts: u64,
    pub routing_failures: u64,
    pub unreachable_leg: u64,
    pub window_violation: u64,
    pub budget_violation: u64,
    pub duplicate_passenger: u64,
    pub oracle_failure: u64,
}

impl RunSummary {
    pub fn success_rate(&self) -> f64 {
        if self.routing_attempts == 0 {
            return 1.0;
        }
        1.0 - (self.routing_failures as f64 / self.routing_attempts as f64)
    }

    /// Emit the final summary at `info` level, and a `warn` if the routing
    /// failure rate exceeds 10%.
    pub fn log(&self) {
        log::info!(
            "routing: {} attempts, {} failures ({:.1}% success); rejections: unreachable={} window={} budget={} duplicate={} oracle={}",
            self.routing_attempts,
            self.routing_failures,
            self.success_rate() * 100.0,
            self.unreachable_leg,
            self.window_violation,
            self.budget_violation,
            self.duplicate_passenger,
            self.oracle_failure,
        );
        let failure_rate = if self.routing_attempts == 0 {
            0.0
        } else {
            self.routing_failures as f64 / self.routing_attempts as f64
        };
        if failure_rate > 0.10 {
            log::warn!(
                "routing failure rate {:.1}% exceeds the 10% threshold",
                failure_rate * 100.0
            );
        }
    }
}
