//! `RideExtender` — grows degree-`d` rides to degree `d+1` one request at a
//! time, using the shareability graph to avoid re-deriving pairwise
//! feasibility from scratch.

use rayon::prelude::*;

use exmas_core::{Request, RequestId, Ride, RideId, RideKind};
use exmas_graph::{RideEdgeKind, ShareabilityGraph};
use exmas_oracle::{RoutingOracle, ScoringOracle};

use crate::budget;
use crate::delay;
use crate::stats::{RejectionCounters, RejectionReason};

/// One accepted, not-yet-indexed extension plus the `(baseRideIndex,
/// candidateRequest)` key the join step sorts by.
struct ExtensionOutcome {
    base_ride_index: RideId,
    candidate_request: RequestId,
    ride: Ride,
}

pub struct RideExtender;

impl RideExtender {
    /// Attempt to extend every ride in `base_rides` by one request, using
    /// `graph` (built from the degree-2 set) to find candidates. Assigns
    /// final indices starting at `next_index`.
    ///
    /// The outer loop over base rides is fanned out with Rayon; results are
    /// collected, sorted by `(baseRideIndex, candidateRequest)`, and indexed
    /// sequentially — the only place degree->=3 ride indices are assigned,
    /// which is what keeps the result independent of worker scheduling.
    pub fn extend(
        base_rides: &[Ride],
        graph: &ShareabilityGraph,
        request_table: &[Request],
        router: &dyn RoutingOracle,
        scorer: &dyn ScoringOracle,
        epsilon: f64,
        next_index: u32,
        counters: &RejectionCounters,
    ) -> Vec<Ride> {
        let mut outcomes: Vec<ExtensionOutcome> = base_rides
            .par_iter()
            .map(|base| {
                graph
                    .common_neighbors_sorted(&base.requests)
                    .into_iter()
                    .filter_map(|c| {
                        try_extend(base, c, graph, request_table, router, scorer, epsilon, counters).map(
                            |ride| ExtensionOutcome {
                                base_ride_index: base.index,
                                candidate_request: c,
                                ride,
                            },
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        outcomes.sort_by_key(|o| (o.base_ride_index.0, o.candidate_request.0));

        let mut idx = next_index;
        let mut rides = Vec::with_capacity(outcomes.len());
        for mut o in outcomes {
            o.ride.index = RideId(idx);
            idx += 1;
            rides.push(o.ride);
        }
        rides
    }
}

/// Attempt to insert `c` into `base`, producing a degree `base.degree + 1`
/// ride, or `None` if any step below rejects it.
fn try_extend(
    base: &Ride,
    c: RequestId,
    graph: &ShareabilityGraph,
    request_table: &[Request],
    router: &dyn RoutingOracle,
    scorer: &dyn ScoringOracle,
    epsilon: f64,
    counters: &RejectionCounters,
) -> Option<Ride> {
    let candidate = &request_table[c.index()];

    // Step 2a — no shared paxId with any existing rider.
    if base
        .requests
        .iter()
        .any(|&r| request_table[r.index()].pax_id == candidate.pax_id)
    {
        counters.record(RejectionReason::DuplicatePassenger);
        return None;
    }

    // Step 2b — one representative edge per existing rider.
    let mut rep_kinds = Vec::with_capacity(base.degree);
    for &r_k in &base.requests {
        match graph.representative_edge(r_k, c) {
            Some((_, kind)) => rep_kinds.push(kind),
            None => {
                counters.record(RejectionReason::WindowViolation);
                return None;
            }
        }
    }

    // Step 2c — classify the insertion position.
    let has_fifo = rep_kinds.iter().any(|&k| k == RideEdgeKind::Fifo);
    let has_lifo = rep_kinds.iter().any(|&k| k == RideEdgeKind::Lifo);

    let insert_pos = if !has_lifo {
        base.degree
    } else if !has_fifo {
        0
    } else {
        let mut max_fifo_pos: Option<usize> = None;
        let mut min_lifo_pos: Option<usize> = None;
        for (k, &kind) in rep_kinds.iter().enumerate() {
            let m = base
                .destinations_ordered_requests
                .iter()
                .position(|&v| v == k)
                .expect("every rider has exactly one dropoff slot");
            match kind {
                RideEdgeKind::Fifo => max_fifo_pos = Some(max_fifo_pos.map_or(m, |mx| mx.max(m))),
                RideEdgeKind::Lifo => min_lifo_pos = Some(min_lifo_pos.map_or(m, |mn| mn.min(m))),
            }
        }
        let max_fifo_pos = max_fifo_pos.expect("has_fifo implies at least one FIFO representative");
        let min_lifo_pos = min_lifo_pos.expect("has_lifo implies at least one LIFO representative");
        if min_lifo_pos <= max_fifo_pos {
            counters.record(RejectionReason::WindowViolation);
            return None;
        }
        min_lifo_pos
    };

    // Step 3 — extend the pickup/dropoff arrays.
    let mut requests = base.requests.clone();
    requests.push(c);
    let mut origins_ordered = base.origins_ordered.clone();
    origins_ordered.push(candidate.origin);

    let mut destinations_ordered = base.destinations_ordered.clone();
    destinations_ordered.insert(insert_pos, candidate.destination);
    let mut destinations_ordered_requests = base.destinations_ordered_requests.clone();
    destinations_ordered_requests.insert(insert_pos, base.degree);

    let new_degree = requests.len();
    let anchor = request_table[requests[0].index()].request_time;

    // Step 4 — routing legs over the concatenated pickup+dropoff sequence.
    let mut sequence = Vec::with_capacity(2 * new_degree);
    sequence.extend_from_slice(&origins_ordered);
    sequence.extend_from_slice(&destinations_ordered);

    let mut leg_tt = Vec::with_capacity(sequence.len() - 1);
    let mut leg_dist = Vec::with_capacity(sequence.len() - 1);
    let mut leg_util = Vec::with_capacity(sequence.len() - 1);
    for w in sequence.windows(2) {
        let seg = router.segment(w[0], w[1], anchor);
        if !seg.is_reachable() {
            counters.record(RejectionReason::UnreachableLeg);
            return None;
        }
        leg_tt.push(seg.travel_time);
        leg_dist.push(seg.distance);
        leg_util.push(seg.utility);
    }

    let mut prefix_tt = vec![0.0; leg_tt.len() + 1];
    let mut prefix_dist = vec![0.0; leg_tt.len() + 1];
    let mut prefix_util = vec![0.0; leg_tt.len() + 1];
    for t in 0..leg_tt.len() {
        prefix_tt[t + 1] = prefix_tt[t] + leg_tt[t];
        prefix_dist[t + 1] = prefix_dist[t] + leg_dist[t];
        prefix_util[t + 1] = prefix_util[t] + leg_util[t];
    }

    // Step 5 — per-passenger in-vehicle time, direct-time floor, window check.
    let mut passenger_travel_time = Vec::with_capacity(new_degree);
    let mut passenger_distance = Vec::with_capacity(new_degree);
    let mut passenger_network_utility = Vec::with_capacity(new_degree);
    let mut delays_raw = Vec::with_capacity(new_degree);
    let mut eff_max_neg = Vec::with_capacity(new_degree);
    let mut eff_max_pos = Vec::with_capacity(new_degree);

    for k in 0..new_degree {
        let rider = &request_table[requests[k].index()];
        let dropoff_slot = destinations_ordered_requests
            .iter()
            .position(|&v| v == k)
            .expect("every rider has exactly one dropoff slot");
        let dropoff_index = new_degree + dropoff_slot;

        let ptt = (prefix_tt[dropoff_index] - prefix_tt[k]).max(rider.direct_travel_time);
        if ptt > rider.max_travel_time {
            counters.record(RejectionReason::WindowViolation);
            return None;
        }
        passenger_travel_time.push(ptt);
        passenger_distance.push(prefix_dist[dropoff_index] - prefix_dist[k]);
        passenger_network_utility.push(prefix_util[dropoff_index] - prefix_util[k]);

        // Step 6 — raw delay.
        let pickup_time = anchor + prefix_tt[k];
        delays_raw.push(pickup_time - rider.request_time);

        // Step 7 — effective delay window.
        let det = ptt - rider.direct_travel_time;
        let pos_adj = if rider.positive_delay_rel_component > 0.0 {
            (rider.positive_delay_rel_component - det).max(0.0)
        } else {
            0.0
        };
        let neg_adj = if rider.negative_delay_rel_component > 0.0 {
            (rider.negative_delay_rel_component - det).max(0.0)
        } else {
            0.0
        };
        eff_max_pos.push((rider.max_positive_delay() - det) - pos_adj);
        eff_max_neg.push(rider.max_negative_delay() - neg_adj);
    }

    // Step 8 — delay optimization.
    let optimized = delay::optimize(&delays_raw, &eff_max_neg, &eff_max_pos, epsilon);
    let optimized = match optimized {
        Some(o) => o,
        None => {
            counters.record(RejectionReason::WindowViolation);
            return None;
        }
    };

    // Step 9 — budget validation.
    let remaining_budget = match budget::validate(
        scorer,
        &requests,
        request_table,
        &optimized.delays,
        &passenger_travel_time,
        &passenger_distance,
    ) {
        Some(r) => r,
        None => {
            counters.record(RejectionReason::BudgetViolation);
            return None;
        }
    };

    let ride_travel_time = *prefix_tt.last().unwrap();
    let ride_distance = *prefix_dist.last().unwrap();
    let ride_utility = *prefix_util.last().unwrap();

    let ride = Ride {
        index: RideId::INVALID,
        degree: new_degree,
        kind: classify_kind(&destinations_ordered_requests),
        requests,
        origins_ordered,
        destinations_ordered,
        destinations_ordered_requests,
        passenger_travel_time,
        passenger_distance,
        passenger_network_utility,
        delay: optimized.delays,
        remaining_budget,
        connection_travel_time: leg_tt,
        connection_distance: leg_dist,
        connection_utility: leg_util,
        ride_travel_time,
        ride_distance,
        ride_utility,
        start_time: anchor,
        end_time: anchor + ride_travel_time,
    };
    ride.assert_shape_invariants();
    Some(ride)
}

/// Derive the dropoff-ordering kind from the final `destinationsOrderedRequests`
/// array shape, rather than tracking it incrementally through each insertion.
fn classify_kind(destinations_ordered_requests: &[usize]) -> RideKind {
    let degree = destinations_ordered_requests.len();
    if degree == 1 {
        return RideKind::Single;
    }
    if destinations_ordered_requests.iter().enumerate().all(|(i, &v)| v == i) {
        return RideKind::Fifo;
    }
    if destinations_ordered_requests
        .iter()
        .enumerate()
        .all(|(i, &v)| v == degree - 1 - i)
    {
        return RideKind::Lifo;
    }
    RideKind::Mixed
}
