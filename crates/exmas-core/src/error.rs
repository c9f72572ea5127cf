//! Core error type.
//!
//! Sub-crates (`exmas-oracle`, `exmas-graph`, `exmas-engine`) define their own
//! error enums and convert them into `CoreError` via `From` impls where a
//! construction-time failure bottoms out here, or keep their own error types
//! separate and wrap `CoreError` as one variant.
//!
//! Only the two *fatal* members of the error taxonomy live here:
//! `InfeasibleRequest` (rejected at construction, fatal for that request but
//! not the run) and `ConfigurationError` (fatal at startup). The remaining
//! taxonomy entries (`UnreachableLeg`, `WindowViolation`, `BudgetViolation`,
//! `DuplicatePassenger`, `OracleFailure`) are local-recovery outcomes, not
//! propagated errors — see `exmas_engine::stats::RejectionReason`.

use thiserror::Error;

use crate::RequestId;

/// The top-level error type for `exmas-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("request {0} is infeasible: earliest departure is after latest departure minus direct travel time")]
    InfeasibleRequest(RequestId),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Shorthand result type for all `exmas-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
