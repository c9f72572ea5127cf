//! Engine-level error type.
//!
//! Only configuration failures and programmer-invariant failures terminate
//! the run. Every per-candidate recovery (unreachable leg, window violation,
//! budget violation, duplicate passenger, oracle failure) is tracked through
//! [`crate::stats::RejectionReason`] instead — see that module's docs.

use thiserror::Error;

use exmas_core::CoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
