//! `exmas-core` — foundational types for the `exmas` ride-sharing enumeration engine.
//!
//! This crate is a dependency of every other `exmas-*` crate. It
//! intentionally has no `exmas-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `RequestId`, `RideId`, `PaxId`, `Location`          |
//! | [`request`] | `Request`                                           |
//! | [`ride`]    | `Ride`, `RideKind`                                  |
//! | [`segment`] | `TravelSegment`                                     |
//! | [`config`]  | `EngineConfig`                                      |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod request;
pub mod ride;
pub mod segment;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{Location, PaxId, RequestId, RideId};
pub use request::Request;
pub use ride::{Ride, RideKind};
pub use segment::TravelSegment;
