//! `SingleRideGenerator` — one degree-1 ride per request.
//!
//! Reconciles a genuine tension in the requirements: the prose description
//! of this component says singles need no network or scoring calls, but the
//! acceptance check requires
//! `remainingBudget[0] = score_oracle(r, 0, directTravelTime, directDistance)
//! - bestAlternativeScore` on every single. The scoring call is cheap (one
//! call per request, no routing) and the acceptance check is unambiguous,
//! so this implementation makes the scoring call the prose waves away.

use exmas_core::{Request, Ride, RideId, RideKind};
use exmas_oracle::ScoringOracle;

/// One degree-1 ride per request, using direct-ride metrics verbatim.
/// Ride index equals request index.
pub struct SingleRideGenerator;

impl SingleRideGenerator {
    pub fn generate(requests: &[Request], scorer: &dyn ScoringOracle) -> Vec<Ride> {
        requests
            .iter()
            .map(|r| {
                let score = scorer.score(r.index, 0.0, r.direct_travel_time, r.direct_distance);
                let remaining_budget = score - r.best_alternative_score;

                let ride = Ride {
                    index: RideId(r.index.0),
                    degree: 1,
                    kind: RideKind::Single,
                    requests: vec![r.index],
                    origins_ordered: vec![r.origin],
                    destinations_ordered: vec![r.destination],
                    destinations_ordered_requests: vec![0],
                    passenger_travel_time: vec![r.direct_travel_time],
                    passenger_distance: vec![r.direct_distance],
                    passenger_network_utility: vec![score],
                    delay: vec![0.0],
                    remaining_budget: vec![remaining_budget],
                    connection_travel_time: vec![r.direct_travel_time],
                    connection_distance: vec![r.direct_distance],
                    connection_utility: vec![score],
                    ride_travel_time: r.direct_travel_time,
                    ride_distance: r.direct_distance,
                    ride_utility: score,
                    start_time: r.request_time,
                    end_time: r.request_time + r.direct_travel_time,
                };
                ride.assert_shape_invariants();
                ride
            })
            .collect()
    }
}
