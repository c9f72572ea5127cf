//! The scoring oracle contract and a linear test double.

use exmas_core::RequestId;

/// Converts a rider's shared-ride experience into a utility score.
///
/// Must be pure: the same `(request, delay, passenger_travel_time,
/// passenger_distance)` must always score identically, which is required
/// for reproducibility. The convention is negative disutility: a worse
/// experience scores lower.
pub trait ScoringOracle: Send + Sync {
    fn score(
        &self,
        request: RequestId,
        delay: f64,
        passenger_travel_time: f64,
        passenger_distance: f64,
    ) -> f64;
}

/// Linear-in-travel-time scorer, sufficient for tests and as a reference
/// production scorer. Ignores `request` and `distance` entirely; penalizes
/// travel time and delay at configurable per-second rates.
pub struct LinearScorer {
    pub value_of_time: f64,
    pub delay_penalty: f64,
}

impl LinearScorer {
    pub fn new(value_of_time: f64, delay_penalty: f64) -> Self {
        Self { value_of_time, delay_penalty }
    }
}

impl Default for LinearScorer {
    /// One utility unit per minute of in-vehicle time, doubled for delay.
    fn default() -> Self {
        Self { value_of_time: 1.0 / 60.0, delay_penalty: 2.0 / 60.0 }
    }
}

impl ScoringOracle for LinearScorer {
    fn score(
        &self,
        _request: RequestId,
        delay: f64,
        passenger_travel_time: f64,
        _passenger_distance: f64,
    ) -> f64 {
        -(self.value_of_time * passenger_travel_time + self.delay_penalty * delay.abs())
    }
}
