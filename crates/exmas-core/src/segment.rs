//! Result type for a single routing-oracle query.
//!
//! A small value struct returned by a pluggable routing trait, folding
//! "no path exists" into the type itself as a sentinel variant rather than
//! an `Err`: the routing oracle returns an unreachable sentinel rather than
//! failing.

/// The outcome of one `(from, to, departure_time)` routing query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TravelSegment {
    /// Travel time in seconds. `f64::INFINITY` when unreachable.
    pub travel_time: f64,
    /// Distance in the oracle's native distance unit. `f64::INFINITY` when unreachable.
    pub distance: f64,
    /// Negative generalized cost (utility). `f64::NEG_INFINITY` when unreachable.
    pub utility: f64,
}

impl TravelSegment {
    /// The unreachable sentinel: infinite travel time, infinite distance,
    /// and minus-infinite utility so it never wins a comparison by accident.
    pub const UNREACHABLE: TravelSegment = TravelSegment {
        travel_time: f64::INFINITY,
        distance: f64::INFINITY,
        utility: f64::NEG_INFINITY,
    };

    /// Construct a reachable segment.
    #[inline]
    pub fn reachable(travel_time: f64, distance: f64, utility: f64) -> Self {
        Self { travel_time, distance, utility }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.travel_time.is_finite()
    }
}
