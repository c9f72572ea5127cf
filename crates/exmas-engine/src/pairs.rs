//! `PairGenerator` — FIFO/LIFO degree-2 search. The heaviest component in
//! the engine.

use rayon::prelude::*;

use exmas_core::{Request, RequestId, Ride, RideId, RideKind};
use exmas_graph::RideEdgeKind;
use exmas_oracle::{RoutingOracle, ScoringOracle};

use crate::delay;
use crate::stats::{RejectionCounters, RejectionReason};
use crate::time_filter::TimeFilter;

/// One accepted, not-yet-indexed candidate ride plus the `(source,
/// candidate, kind)` key the join step sorts by — indices are assigned in
/// that total order so the result is independent of worker scheduling.
pub struct PairOutcome {
    pub source: RequestId,
    pub candidate: RequestId,
    pub kind: RideEdgeKind,
    pub ride: Ride,
}

pub struct PairGenerator;

impl PairGenerator {
    /// Enumerate all feasible ordered pairs within the time horizon,
    /// assigning final indices starting at `next_index` — the pair-ride
    /// index space begins right after the last single-ride index.
    ///
    /// The outer loop over `i` is fanned out with Rayon; results are
    /// collected, sorted by `(source, candidate, kind)`, and indexed
    /// sequentially in the caller's thread — the only place ride indices are
    /// ever assigned.
    pub fn generate(
        requests: &[Request],
        time_filter: &TimeFilter,
        horizon: f64,
        router: &dyn RoutingOracle,
        scorer: &dyn ScoringOracle,
        epsilon: f64,
        next_index: u32,
        counters: &RejectionCounters,
    ) -> Vec<PairOutcome> {
        let mut outcomes: Vec<PairOutcome> = requests
            .par_iter()
            .map(|ri| {
                time_filter
                    .candidates(ri.index, horizon)
                    .into_iter()
                    .flat_map(|j| try_pair(ri, &requests[j.index()], router, scorer, epsilon, counters))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        outcomes.sort_by_key(|o| (o.source.0, o.candidate.0, o.kind.tiebreak_rank()));

        let mut idx = next_index;
        for o in &mut outcomes {
            o.ride.index = RideId(idx);
            idx += 1;
        }
        outcomes
    }
}

/// Attempt both FIFO and LIFO degree-2 rides for the ordered pair `(i, j)`.
/// Returns zero, one, or two accepted [`PairOutcome`]s.
fn try_pair(
    i: &Request,
    j: &Request,
    router: &dyn RoutingOracle,
    scorer: &dyn ScoringOracle,
    epsilon: f64,
    counters: &RejectionCounters,
) -> Vec<PairOutcome> {
    if i.pax_id == j.pax_id {
        counters.record(RejectionReason::DuplicatePassenger);
        return Vec::new();
    }

    // Step A — coarse temporal window, no routing yet.
    if j.latest_departure < i.earliest_departure {
        counters.record(RejectionReason::WindowViolation);
        return Vec::new();
    }
    if j.earliest_departure > i.latest_departure + i.direct_travel_time {
        counters.record(RejectionReason::WindowViolation);
        return Vec::new();
    }

    // Step B — common leg, shared by both attempts.
    let oo = router.segment(i.origin, j.origin, i.request_time);
    if !oo.is_reachable() {
        counters.record(RejectionReason::UnreachableLeg);
        return Vec::new();
    }

    // Step C — refined temporal check using the actual leg travel time.
    if i.latest_departure + oo.travel_time < j.earliest_departure {
        counters.record(RejectionReason::WindowViolation);
        return Vec::new();
    }
    if i.earliest_departure + oo.travel_time > j.latest_departure {
        counters.record(RejectionReason::WindowViolation);
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2);

    if let Some(ride) = try_fifo(i, j, oo.travel_time, oo.distance, oo.utility, router, scorer, epsilon, counters) {
        out.push(PairOutcome { source: i.index, candidate: j.index, kind: RideEdgeKind::Fifo, ride });
    }
    if let Some(ride) = try_lifo(i, j, oo.travel_time, oo.distance, oo.utility, router, scorer, epsilon, counters) {
        out.push(PairOutcome { source: i.index, candidate: j.index, kind: RideEdgeKind::Lifo, ride });
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn try_fifo(
    i: &Request,
    j: &Request,
    oo_tt: f64,
    oo_dist: f64,
    oo_util: f64,
    router: &dyn RoutingOracle,
    scorer: &dyn ScoringOracle,
    epsilon: f64,
    counters: &RejectionCounters,
) -> Option<Ride> {
    // Step D — fetch the remaining FIFO legs: Oj->Di, Di->Dj.
    let od = router.segment(j.origin, i.destination, i.request_time);
    let dd = router.segment(i.destination, j.destination, i.request_time);
    if !od.is_reachable() || !dd.is_reachable() {
        counters.record(RejectionReason::UnreachableLeg);
        return None;
    }

    // Step E — passenger travel times, with the direct-time floor.
    let ptt_i = (oo_tt + od.travel_time).max(i.direct_travel_time);
    let ptt_j = (od.travel_time + dd.travel_time).max(j.direct_travel_time);
    if ptt_i > i.max_travel_time || ptt_j > j.max_travel_time {
        counters.record(RejectionReason::WindowViolation);
        return None;
    }

    let dist_i = oo_dist + od.distance;
    let dist_j = od.distance + dd.distance;
    let util_i = oo_util + od.utility;
    let util_j = od.utility + dd.utility;

    // Step G — raw delay: rider j is picked up after the O_i->O_j leg.
    let raw_delays = [0.0, i.request_time + oo_tt - j.request_time];

    build_pair_ride(
        i,
        j,
        RideKind::Fifo,
        [i.destination, j.destination],
        [0, 1],
        [ptt_i, ptt_j],
        [dist_i, dist_j],
        [util_i, util_j],
        raw_delays,
        [oo_tt, od.travel_time, dd.travel_time],
        [oo_dist, od.distance, dd.distance],
        [oo_util, od.utility, dd.utility],
        scorer,
        epsilon,
        counters,
    )
}

#[allow(clippy::too_many_arguments)]
fn try_lifo(
    i: &Request,
    j: &Request,
    oo_tt: f64,
    oo_dist: f64,
    oo_util: f64,
    router: &dyn RoutingOracle,
    scorer: &dyn ScoringOracle,
    epsilon: f64,
    counters: &RejectionCounters,
) -> Option<Ride> {
    // Step D — fetch the remaining LIFO legs: Oj->Dj, Dj->Di.
    let oj = router.segment(j.origin, j.destination, i.request_time);
    let jd = router.segment(j.destination, i.destination, i.request_time);
    if !oj.is_reachable() || !jd.is_reachable() {
        counters.record(RejectionReason::UnreachableLeg);
        return None;
    }

    // Step E.
    let ptt_i = (oo_tt + oj.travel_time + jd.travel_time).max(i.direct_travel_time);
    let ptt_j = oj.travel_time.max(j.direct_travel_time);
    if ptt_i > i.max_travel_time || ptt_j > j.max_travel_time {
        counters.record(RejectionReason::WindowViolation);
        return None;
    }

    let dist_i = oo_dist + oj.distance + jd.distance;
    let dist_j = oj.distance;
    let util_i = oo_util + oj.utility + jd.utility;
    let util_j = oj.utility;

    let raw_delays = [0.0, i.request_time + oo_tt - j.request_time];

    build_pair_ride(
        i,
        j,
        RideKind::Lifo,
        [j.destination, i.destination],
        [1, 0],
        [ptt_i, ptt_j],
        [dist_i, dist_j],
        [util_i, util_j],
        raw_delays,
        [oo_tt, oj.travel_time, jd.travel_time],
        [oo_dist, oj.distance, jd.distance],
        [oo_util, oj.utility, jd.utility],
        scorer,
        epsilon,
        counters,
    )
}

/// Shared tail of step F onward, parameterized by the kind-specific pieces
/// already computed in [`try_fifo`]/[`try_lifo`].
#[allow(clippy::too_many_arguments)]
fn build_pair_ride(
    i: &Request,
    j: &Request,
    kind: RideKind,
    destinations_ordered: [exmas_core::Location; 2],
    destinations_ordered_requests: [usize; 2],
    passenger_travel_time: [f64; 2],
    passenger_distance: [f64; 2],
    passenger_network_utility: [f64; 2],
    raw_delays: [f64; 2],
    connection_travel_time: [f64; 3],
    connection_distance: [f64; 3],
    connection_utility: [f64; 3],
    scorer: &dyn ScoringOracle,
    epsilon: f64,
    counters: &RejectionCounters,
) -> Option<Ride> {
    // Step F — effective delay window per passenger.
    let riders = [i, j];
    let mut eff_max_neg = [0.0; 2];
    let mut eff_max_pos = [0.0; 2];
    for k in 0..2 {
        let det = passenger_travel_time[k] - riders[k].direct_travel_time;
        let pos_adj = if riders[k].positive_delay_rel_component > 0.0 {
            (riders[k].positive_delay_rel_component - det).max(0.0)
        } else {
            0.0
        };
        let neg_adj = if riders[k].negative_delay_rel_component > 0.0 {
            (riders[k].negative_delay_rel_component - det).max(0.0)
        } else {
            0.0
        };
        eff_max_pos[k] = (riders[k].max_positive_delay() - det) - pos_adj;
        eff_max_neg[k] = riders[k].max_negative_delay() - neg_adj;
    }

    // Step H — delay optimization.
    let optimized = match delay::optimize(&raw_delays, &eff_max_neg, &eff_max_pos, epsilon) {
        Some(o) => o,
        None => {
            counters.record(RejectionReason::WindowViolation);
            return None;
        }
    };

    // Step I — budget validation.
    let requests = [i.index, j.index];
    let request_table_lookup = |id: RequestId| if id == i.index { i } else { j };
    let mut remaining_budget = [0.0; 2];
    for k in 0..2 {
        let request = request_table_lookup(requests[k]);
        let score = scorer.score(
            requests[k],
            optimized.delays[k],
            passenger_travel_time[k],
            passenger_distance[k],
        );
        let rb = score - request.best_alternative_score;
        if rb < 0.0 {
            counters.record(RejectionReason::BudgetViolation);
            return None;
        }
        remaining_budget[k] = rb;
    }

    let ride_travel_time: f64 = connection_travel_time.iter().sum();
    let ride_distance: f64 = connection_distance.iter().sum();
    let ride_utility: f64 = connection_utility.iter().sum();

    let ride = Ride {
        index: RideId::INVALID, // assigned by the caller's join step
        degree: 2,
        kind,
        requests: vec![i.index, j.index],
        origins_ordered: vec![i.origin, j.origin],
        destinations_ordered: destinations_ordered.to_vec(),
        destinations_ordered_requests: destinations_ordered_requests.to_vec(),
        passenger_travel_time: passenger_travel_time.to_vec(),
        passenger_distance: passenger_distance.to_vec(),
        passenger_network_utility: passenger_network_utility.to_vec(),
        delay: optimized.delays,
        remaining_budget: remaining_budget.to_vec(),
        connection_travel_time: connection_travel_time.to_vec(),
        connection_distance: connection_distance.to_vec(),
        connection_utility: connection_utility.to_vec(),
        ride_travel_time,
        ride_distance,
        ride_utility,
        start_time: i.request_time,
        end_time: i.request_time + ride_travel_time,
    };
    ride.assert_shape_invariants();
    Some(ride)
}
