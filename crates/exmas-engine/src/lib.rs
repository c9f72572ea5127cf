//! `exmas-engine` — combination-enumeration orchestrator for the `exmas`
//! ride-sharing engine.
//!
//! # Phase sequence
//!
//! ```text
//! TimeFilter ─┐
//!             ├─→ SingleRideGenerator ─→ PairGenerator ─→ ShareabilityGraph ─→ RideExtender (looped)
//! Requests ───┘
//! ```
//!
//! - **TimeFilter**: pre-sorted index over request times, supplying
//!   candidate windows for pair search.
//! - **SingleRideGenerator**: one degree-1 ride per request.
//! - **PairGenerator**: FIFO/LIFO degree-2 search over time-filtered
//!   candidate pairs.
//! - **ShareabilityGraph** ([`exmas_graph`]): built from the accepted
//!   degree-2 set.
//! - **RideExtender**: iteratively grows degree-`d` rides to `d+1` using the
//!   graph, up to `config.max_degree`.
//!
//! Shared by [`pairs`] and [`extend`]: the delay optimizer ([`delay`]) and
//! the budget validator ([`budget`]).
//!
//! # Determinism under parallelism
//!
//! Every phase that fans work out over Rayon joins it with a sequential
//! sort-by-key-then-assign-index step before any ride index is handed out,
//! so the final ride list is byte-identical regardless of `config.parallelism`.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                      |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to re-exported graph types.  |

pub mod budget;
pub mod builder;
pub mod delay;
pub mod engine;
pub mod error;
pub mod extend;
pub mod observer;
pub mod pairs;
pub mod singles;
pub mod stats;
pub mod time_filter;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use stats::{RejectionCounters, RejectionReason, RunSummary};
pub use time_filter::TimeFilter;
