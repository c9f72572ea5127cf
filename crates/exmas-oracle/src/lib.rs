//! `exmas-oracle` — routing and scoring oracle contracts.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|----------------------------------------------------------------|
//! | [`router`]  | `RoutingOracle`, `PathSolver`, `CachedRoutingOracle`, `InMemoryTableOracle` |
//! | [`scoring`] | `ScoringOracle`, `LinearScorer`                               |
//! | [`error`]   | `OracleError`, `OracleResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod error;
pub mod router;
pub mod scoring;


pub use error::{OracleError, OracleResult};
pub use router::{CachedRoutingOracle, InMemoryTableOracle, PathSolver, RoutingOracle};
pub use scoring::{LinearScorer, ScoringOracle};
