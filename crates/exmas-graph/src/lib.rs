//! `exmas-graph` — the shareability graph over request indices.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|------------------------------------------------------------|
//! | [`graph`]   | `ShareabilityGraph`, `RideEdgeKind`                   |
//! | [`builder`] | `GraphBuilder`                                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod builder;
pub mod graph;

#[cfg(test)]
mod tests;

pub use builder::GraphBuilder;
pub use graph::{RideEdgeKind, ShareabilityGraph};
