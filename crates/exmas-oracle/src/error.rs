//! Oracle-subsystem error type.
//!
//! Routing and scoring are modeled as pure, infallible queries: the routing
//! oracle returns an unreachable sentinel rather than failing, and the
//! scoring oracle is required to be pure. The only failures that belong to
//! this crate are construction-time configuration errors — a runtime query
//! never returns an `Err` here. A query that genuinely misbehaves (the
//! underlying solver panics) is caught at the call site in `exmas-engine`
//! and turned into an `OracleFailure` rejection, not propagated through this
//! type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type OracleResult<T> = Result<T, OracleError>;
