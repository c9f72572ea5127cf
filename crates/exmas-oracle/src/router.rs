//! The routing oracle contract and its production implementation.
//!
//! # Pluggability
//!
//! `exmas-engine` calls routing exclusively through the [`RoutingOracle`]
//! trait, so applications can swap in a custom path solver without touching
//! engine code. [`CachedRoutingOracle`] is the production wrapper: it adds a
//! time-binned cache in front of any [`PathSolver`].
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync` — the engine calls routing from
//! every Rayon worker during the parallel phases of pair search and ride
//! extension. [`CachedRoutingOracle`] serializes all calls into the wrapped
//! solver behind a single mutex on a cache miss, so `S` itself need not be
//! `Sync` — only `Send`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use dashmap::DashMap;

use exmas_core::{Location, TravelSegment};

/// Time-dependent shortest-path query, answered between two [`Location`]s at
/// a departure time.
///
/// Must be pure w.r.t. `(from, to, timeBin(departureTime))` — two calls in
/// the same time bin must return equal segments. `segment` never fails; an
/// unreachable pair is reported via [`TravelSegment::UNREACHABLE`], not an
/// `Err`.
pub trait RoutingOracle: Send + Sync {
    /// Answer one routing query.
    fn segment(&self, from: Location, to: Location, departure_time: f64) -> TravelSegment;

    /// Total number of `segment` calls served, cache hit or miss.
    fn attempts(&self) -> u64;

    /// Number of calls that resolved to [`TravelSegment::UNREACHABLE`].
    fn failures(&self) -> u64;
}

/// The underlying shortest-path computer a [`CachedRoutingOracle`] wraps.
///
/// Unlike [`RoutingOracle`], a solver need not be `Sync` — the cache
/// serializes every call into it behind a mutex, so implementations that
/// hold scratch buffers or a non-thread-safe graph library are fine.
pub trait PathSolver: Send {
    fn solve(&self, from: Location, to: Location, departure_time: f64) -> TravelSegment;
}

/// Time-binned cache in front of a [`PathSolver`].
///
/// The cache key is `(from, to, timeBin)`. A miss takes the solver mutex and
/// recomputes; [`dashmap`]'s sharded locking means a hit on one key never
/// blocks on another key's in-flight computation, and concurrent misses on
/// the *same* key still only run the solver once — the second caller blocks
/// on the shard lock and then observes the first caller's freshly inserted
/// entry.
pub struct CachedRoutingOracle<S> {
    solver: Mutex<S>,
    cache: DashMap<(Location, Location, i64), TravelSegment>,
    time_bin_size: f64,
    attempts: AtomicU64,
    failures: AtomicU64,
}

impl<S: PathSolver> CachedRoutingOracle<S> {
    /// `time_bin_size` must match [`exmas_core::EngineConfig::time_bin_size`]
    /// used elsewhere in the run; the cache key's temporal resolution is
    /// otherwise inconsistent with the rest of the engine.
    pub fn new(solver: S, time_bin_size: f64) -> Self {
        Self {
            solver: Mutex::new(solver),
            cache: DashMap::new(),
            time_bin_size,
            attempts: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    #[inline]
    fn time_bin(&self, departure_time: f64) -> i64 {
        (departure_time / self.time_bin_size).floor() as i64
    }
}

impl<S: PathSolver> RoutingOracle for CachedRoutingOracle<S> {
    fn segment(&self, from: Location, to: Location, departure_time: f64) -> TravelSegment {
        self.attempts.fetch_add(1, Ordering::Relaxed);

        let key = (from, to, self.time_bin(departure_time));
        let seg = *self
            .cache
            .entry(key)
            .or_insert_with(|| {
                let solver = self.solver.lock().expect("routing solver mutex poisoned");
                solver.solve(from, to, departure_time)
            });

        if !seg.is_reachable() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        seg
    }

    fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// In-memory table oracle — a [`RoutingOracle`] test double backed by an
/// exact `(from, to)` lookup table, with no time-bin sensitivity.
/// Unlisted pairs resolve to [`TravelSegment::UNREACHABLE`].
pub struct InMemoryTableOracle {
    table: std::collections::HashMap<(Location, Location), TravelSegment>,
    attempts: AtomicU64,
    failures: AtomicU64,
}

impl InMemoryTableOracle {
    pub fn new() -> Self {
        Self {
            table: std::collections::HashMap::new(),
            attempts: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub fn with_entry(mut self, from: Location, to: Location, segment: TravelSegment) -> Self {
        self.table.insert((from, to), segment);
        self
    }
}

impl Default for InMemoryTableOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingOracle for InMemoryTableOracle {
    fn segment(&self, from: Location, to: Location, _departure_time: f64) -> TravelSegment {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let seg = self
            .table
            .get(&(from, to))
            .copied()
            .unwrap_or(TravelSegment::UNREACHABLE);
        if !seg.is_reachable() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        seg
    }

    fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}
