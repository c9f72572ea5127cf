//! Travel requests — the engine's atomic unit of demand.
//!
//! A plain data record built through a fallible constructor that checks
//! the invariants the rest of the crate relies on, rather than a builder
//! (there is no optional field here worth a fluent API).

use crate::{CoreError, CoreResult, Location, PaxId, RequestId};

/// A single passenger's travel request.
///
/// Immutable after construction. `index` is a dense `[0, N)` key used
/// everywhere downstream: the shareability graph, oracle calls, and ride
/// membership all refer to requests by `RequestId`, never by value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub index: RequestId,
    pub pax_id: PaxId,

    pub origin: Location,
    pub destination: Location,

    /// Desired pickup instant, in seconds.
    pub request_time: f64,

    /// Reference in-vehicle time and distance for an unshared direct trip.
    pub direct_travel_time: f64,
    pub direct_distance: f64,

    /// Hard upper bound on realized in-vehicle time for this passenger.
    pub max_travel_time: f64,

    /// Absolute pickup time window.
    pub earliest_departure: f64,
    pub latest_departure: f64,

    /// Portion of the positive/negative delay allowance pre-consumed by
    /// detour; feeds the effective-window computation.
    pub positive_delay_rel_component: f64,
    pub negative_delay_rel_component: f64,

    /// Utility (in utils) of the rider's best non-shared option.
    pub best_alternative_score: f64,

    /// Maximum utility degradation this rider accepts vs. `best_alternative_score`.
    /// May be negative, in which case no shared ride is feasible for this rider.
    pub budget: f64,
}

impl Request {
    /// Construct a request, validating the invariants the rest of the crate
    /// relies on.
    ///
    /// Returns [`CoreError::InfeasibleRequest`] if the departure window is
    /// empty (`earliest_departure > latest_departure`). The
    /// remaining invariants (`direct_travel_time <= max_travel_time`,
    /// `earliest_departure <= request_time <= latest_departure`) are
    /// upstream-factory guarantees; violating them is a programmer error, so
    /// they are `debug_assert`ed rather than returned as a recoverable error.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: RequestId,
        pax_id: PaxId,
        origin: Location,
        destination: Location,
        request_time: f64,
        direct_travel_time: f64,
        direct_distance: f64,
        max_travel_time: f64,
        earliest_departure: f64,
        latest_departure: f64,
        positive_delay_rel_component: f64,
        negative_delay_rel_component: f64,
        best_alternative_score: f64,
        budget: f64,
    ) -> CoreResult<Self> {
        debug_assert!(
            direct_travel_time <= max_travel_time,
            "direct_travel_time must not exceed max_travel_time"
        );
        debug_assert!(
            earliest_departure <= request_time && request_time <= latest_departure,
            "request_time must lie within [earliest_departure, latest_departure]"
        );

        if earliest_departure > latest_departure {
            return Err(CoreError::InfeasibleRequest(index));
        }

        Ok(Self {
            index,
            pax_id,
            origin,
            destination,
            request_time,
            direct_travel_time,
            direct_distance,
            max_travel_time,
            earliest_departure,
            latest_departure,
            positive_delay_rel_component,
            negative_delay_rel_component,
            best_alternative_score,
            budget,
        })
    }

    /// `request_time - earliest_departure`: how far pickup may move earlier.
    #[inline]
    pub fn max_negative_delay(&self) -> f64 {
        self.request_time - self.earliest_departure
    }

    /// `latest_departure - request_time`: how far pickup may move later.
    #[inline]
    pub fn max_positive_delay(&self) -> f64 {
        self.latest_departure - self.request_time
    }
}
