//! The `Ride` value type and its dropoff-ordering classification.

use crate::{Location, RequestId, RideId};

/// Dropoff-ordering classification of a ride.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideKind {
    /// Degree-1 ride; the only kind degree-1 rides may carry.
    Single,
    /// Dropoffs in pickup order (first rider in is first rider out).
    Fifo,
    /// Dropoffs in reverse pickup order (first rider in is last rider out).
    Lifo,
    /// Dropoff order that is neither strictly FIFO nor strictly LIFO.
    /// Only possible at degree >= 3, produced by [`RideExtender`]'s MIXED
    /// insertion.
    ///
    /// [`RideExtender`]: ../../exmas_engine/struct.RideExtender.html
    Mixed,
}

impl RideKind {
    /// Ordering used to pick a deterministic representative edge when a
    /// request pair has both a FIFO and a LIFO degree-2 ride between them:
    /// FIFO ranks before LIFO on a tie.
    #[inline]
    pub fn tiebreak_rank(self) -> u8 {
        match self {
            RideKind::Fifo => 0,
            RideKind::Lifo => 1,
            RideKind::Single | RideKind::Mixed => 2,
        }
    }
}

/// A published, immutable shared-ride option.
///
/// Once constructed a `Ride` is never mutated; higher-degree rides are built
/// fresh from a base ride plus one inserted request, never by editing a
/// published ride in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Ride {
    /// Dense, unique index across the whole ride universe. Stable once
    /// assigned.
    pub index: RideId,
    /// Number of passengers; `requests.len()`.
    pub degree: usize,
    pub kind: RideKind,

    /// Requests in pickup order; `requests[0]` defines `start_time`.
    pub requests: Vec<RequestId>,
    /// Pickup locations, always parallel to `requests`.
    pub origins_ordered: Vec<Location>,
    /// Dropoff locations, in dropoff order (may differ from pickup order).
    pub destinations_ordered: Vec<Location>,
    /// `destinations_ordered[k]` belongs to `requests[destinations_ordered_requests[k]]`'s
    /// position in `requests` — i.e. this stores, for each dropoff slot, the
    /// index into `requests` of the rider being dropped off. Never
    /// recomputed from positions; always stored.
    pub destinations_ordered_requests: Vec<usize>,

    /// Per-passenger metrics, length `degree`, indexed the same as `requests`.
    pub passenger_travel_time: Vec<f64>,
    pub passenger_distance: Vec<f64>,
    pub passenger_network_utility: Vec<f64>,
    /// Optimized start-time offset for passenger `i`.
    pub delay: Vec<f64>,
    /// Populated by budget validation; `>= 0` on every published ride.
    pub remaining_budget: Vec<f64>,

    /// Connection metrics for the `2*degree - 1` legs of the concatenated
    /// pickup+dropoff sequence.
    pub connection_travel_time: Vec<f64>,
    pub connection_distance: Vec<f64>,
    pub connection_utility: Vec<f64>,

    pub ride_travel_time: f64,
    pub ride_distance: f64,
    pub ride_utility: f64,
    pub start_time: f64,
    pub end_time: f64,
}

impl Ride {
    /// Shape-only sanity checks shared by every ride constructor in
    /// `exmas-engine`. Full semantic invariants (budget non-negativity,
    /// window membership, …) are checked where the values are computed, not
    /// here.
    pub fn assert_shape_invariants(&self) {
        debug_assert_eq!(self.requests.len(), self.degree);
        debug_assert_eq!(self.origins_ordered.len(), self.degree);
        debug_assert_eq!(self.destinations_ordered.len(), self.degree);
        debug_assert_eq!(self.destinations_ordered_requests.len(), self.degree);
        debug_assert_eq!(self.passenger_travel_time.len(), self.degree);
        debug_assert_eq!(self.passenger_distance.len(), self.degree);
        debug_assert_eq!(self.passenger_network_utility.len(), self.degree);
        debug_assert_eq!(self.delay.len(), self.degree);
        debug_assert_eq!(self.remaining_budget.len(), self.degree);
        debug_assert_eq!(self.connection_travel_time.len(), 2 * self.degree - 1);
        debug_assert_eq!(self.connection_distance.len(), 2 * self.degree - 1);
        debug_assert_eq!(self.connection_utility.len(), 2 * self.degree - 1);
        debug_assert!((self.end_time - (self.start_time + self.ride_travel_time)).abs() < 1e-6);
        if self.kind == RideKind::Single {
            debug_assert_eq!(self.degree, 1);
        }
    }

    /// `true` if every rider's remaining budget is non-negative — the
    /// acceptance criterion a ride must meet to be published.
    pub fn budget_accepted(&self) -> bool {
        self.remaining_budget.iter().all(|&b| b >= 0.0)
    }
}
