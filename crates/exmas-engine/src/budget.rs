//! Budget validator — the scoring-oracle acceptance contract shared by
//! [`crate::pairs::PairGenerator`] and [`crate::extend::RideExtender`].

use exmas_core::{Request, RequestId};
use exmas_oracle::ScoringOracle;

/// Score every passenger and return `remainingBudget`, or `None` if any
/// passenger's remaining budget is negative. A ride is accepted iff
/// `remainingBudget[p] >= 0` for every passenger `p`.
pub fn validate(
    scorer: &dyn ScoringOracle,
    requests: &[RequestId],
    request_table: &[Request],
    delay: &[f64],
    passenger_travel_time: &[f64],
    passenger_distance: &[f64],
) -> Option<Vec<f64>> {
    debug_assert_eq!(requests.len(), delay.len());
    debug_assert_eq!(requests.len(), passenger_travel_time.len());
    debug_assert_eq!(requests.len(), passenger_distance.len());

    let mut remaining = Vec::with_capacity(requests.len());
    for (k, &request_id) in requests.iter().enumerate() {
        let request = &request_table[request_id.index()];
        let score = scorer.score(
            request_id,
            delay[k],
            passenger_travel_time[k],
            passenger_distance[k],
        );
        let remaining_budget = score - request.best_alternative_score;
        if remaining_budget < 0.0 {
            return None;
        }
        remaining.push(remaining_budget);
    }
    Some(remaining)
}
