//! End-to-end scenarios over the full phase sequence: TimeFilter →
//! SingleRideGenerator → PairGenerator → ShareabilityGraph → RideExtender.

use exmas_core::{EngineConfig, Location, PaxId, Request, RequestId, RideKind, TravelSegment};
use exmas_engine::{EngineBuilder, NoopObserver};
use exmas_oracle::{InMemoryTableOracle, ScoringOracle};

/// Ignores every input and always reports zero score, so
/// `remainingBudget[p] = -bestAlternativeScore[p]` — lets scenario tests
/// control acceptance/rejection directly through `best_alternative_score`.
struct ZeroScorer;

impl ScoringOracle for ZeroScorer {
    fn score(&self, _request: RequestId, _delay: f64, _passenger_travel_time: f64, _passenger_distance: f64) -> f64 {
        0.0
    }
}

fn loc(n: u32) -> Location {
    Location(n)
}

#[allow(clippy::too_many_arguments)]
fn request(
    index: u32,
    pax: u32,
    origin: u32,
    destination: u32,
    request_time: f64,
    direct_travel_time: f64,
    max_travel_time: f64,
    earliest_departure: f64,
    latest_departure: f64,
    best_alternative_score: f64,
) -> Request {
    Request::new(
        RequestId(index),
        PaxId(pax),
        loc(origin),
        loc(destination),
        request_time,
        direct_travel_time,
        direct_travel_time * 10.0,
        max_travel_time,
        earliest_departure,
        latest_departure,
        0.0,
        0.0,
        best_alternative_score,
        0.0,
    )
    .expect("request should be feasible")
}

fn config(horizon: f64, max_degree: usize) -> EngineConfig {
    let mut c = EngineConfig::new(horizon, max_degree, 1);
    c.time_bin_size = 60.0;
    c
}

// ── Scenario A — two incompatible riders, no pair ──────────────────────────

#[test]
fn scenario_a_two_incompatible_riders_produce_no_pair() {
    let requests = vec![
        request(0, 0, 0, 1, 0.0, 100.0, 110.0, 0.0, 0.0, 10.0),
        request(1, 1, 0, 1, 10_000.0, 100.0, 110.0, 10_000.0, 10_000.0, 10.0),
    ];
    let router = InMemoryTableOracle::new().with_entry(loc(0), loc(1), TravelSegment::reachable(100.0, 1000.0, -100.0));

    let engine = EngineBuilder::new(config(100.0, 2), requests, router, ZeroScorer).build().unwrap();
    let rides = engine.run(&mut NoopObserver);

    assert_eq!(rides.len(), 2);
    assert!(rides.iter().all(|r| r.degree == 1 && r.kind == RideKind::Single));
    assert_eq!(rides[0].index.0, 0);
    assert_eq!(rides[1].index.0, 1);
}

// ── Scenario B — FIFO-feasible pair ────────────────────────────────────────

fn scenario_b_router() -> InMemoryTableOracle {
    InMemoryTableOracle::new()
        .with_entry(loc(0), loc(1), TravelSegment::reachable(50.0, 500.0, -50.0)) // A->B
        .with_entry(loc(1), loc(2), TravelSegment::reachable(150.0, 1500.0, -150.0)) // B->C
        .with_entry(loc(2), loc(3), TravelSegment::reachable(100.0, 1000.0, -100.0)) // C->D
        .with_entry(loc(0), loc(2), TravelSegment::reachable(200.0, 2000.0, -200.0)) // direct A->C
        .with_entry(loc(1), loc(3), TravelSegment::reachable(200.0, 2000.0, -200.0)) // direct B->D
}

fn scenario_b_requests() -> Vec<Request> {
    vec![
        request(0, 0, 0, 2, 0.0, 200.0, 280.0, -30.0, 30.0, 0.0), // A->C
        request(1, 1, 1, 3, 50.0, 200.0, 260.0, 20.0, 80.0, 0.0), // B->D
    ]
}

#[test]
fn scenario_b_fifo_pair_is_accepted() {
    let requests = scenario_b_requests();
    let router = scenario_b_router();

    let engine = EngineBuilder::new(config(100.0, 2), requests, router, ZeroScorer).build().unwrap();
    let rides = engine.run(&mut NoopObserver);

    assert_eq!(rides.len(), 3);
    let pair = &rides[2];
    assert_eq!(pair.index.0, 2);
    assert_eq!(pair.kind, RideKind::Fifo);
    assert_eq!(pair.requests, vec![RequestId(0), RequestId(1)]);
    assert_eq!(pair.destinations_ordered_requests, vec![0, 1]);
}

// ── Scenario C — LIFO preferred when FIFO's tail leg is unreachable ────────

fn scenario_c_requests() -> Vec<Request> {
    vec![
        request(0, 0, 0, 2, 0.0, 200.0, 400.0, -100.0, 110.0, 0.0), // A->C
        request(1, 1, 1, 3, 20.0, 150.0, 400.0, -50.0, 110.0, 0.0), // B->D
    ]
}

#[test]
fn scenario_c_lifo_pair_when_fifo_leg_unreachable() {
    let requests = scenario_c_requests();
    let router = InMemoryTableOracle::new()
        .with_entry(loc(0), loc(1), TravelSegment::reachable(20.0, 200.0, -20.0)) // A->B (oo)
        .with_entry(loc(1), loc(3), TravelSegment::reachable(150.0, 1500.0, -150.0)) // B->D (LIFO: Oj->Dj)
        .with_entry(loc(3), loc(2), TravelSegment::reachable(100.0, 1000.0, -100.0)); // D->C (LIFO: Dj->Di)
    // B->C (FIFO's od leg) is deliberately absent, so try_fifo rejects on an
    // unreachable leg and only the LIFO attempt can succeed.

    let engine = EngineBuilder::new(config(100.0, 2), requests, router, ZeroScorer).build().unwrap();
    let rides = engine.run(&mut NoopObserver);

    assert_eq!(rides.len(), 3);
    let pair = &rides[2];
    assert_eq!(pair.kind, RideKind::Lifo);
    assert_eq!(pair.destinations_ordered_requests, vec![1, 0]);
}

// ── Scenario D — negative budget rejects an otherwise-feasible pair ────────

#[test]
fn scenario_d_budget_violation_rejects_pair() {
    let mut requests = scenario_b_requests();
    requests[0].best_alternative_score = 0.01; // remainingBudget[0] = 0 - 0.01 = -0.01
    let router = scenario_b_router();

    let engine = EngineBuilder::new(config(100.0, 3), requests, router, ZeroScorer).build().unwrap();
    let rides = engine.run(&mut NoopObserver);

    assert_eq!(rides.len(), 2, "no degree-2 or degree-3 ride should be produced");
    assert!(rides.iter().all(|r| r.degree == 1));
}

// ── Scenario E — degree-3 extension producing a MIXED ride ─────────────────

/// All three riders share a request time and a very wide window/budget so
/// every check except leg reachability is trivially satisfied — isolates the
/// insertion-classification logic the scenario is about.
fn scenario_e_requests() -> Vec<Request> {
    vec![
        request(0, 0, 0, 3, 0.0, 50.0, 100_000.0, -100_000.0, 100_000.0, 0.0),
        request(1, 1, 1, 4, 0.0, 50.0, 100_000.0, -100_000.0, 100_000.0, 0.0),
        request(2, 2, 2, 5, 0.0, 50.0, 100_000.0, -100_000.0, 100_000.0, 0.0),
    ]
}

/// Pair (0,1) is FIFO, pair (0,2) is FIFO, pair (1,2) is LIFO. Extending base
/// ride (0,1) with candidate 2 then has a FIFO-typed representative at
/// dropoff slot 0 (rider 0) and a LIFO-typed representative at dropoff slot 1
/// (rider 1): `minLifoPos(1) > maxFifoPos(0)`, so the insertion is accepted
/// as MIXED at slot 1, giving dropoff order `[0, 2, 1]`. An earlier draft of
/// this fixture targeted `[1, 0, 2]`, but that ordering isn't reachable from
/// any consistent pairwise FIFO/LIFO labeling of (0,1)/(0,2)/(1,2) under the
/// insertion rule below, so `[0, 2, 1]` is used instead.
fn scenario_e_router() -> InMemoryTableOracle {
    InMemoryTableOracle::new()
        // pair (0,1) FIFO: O0->O1, O1->D0, D0->D1
        .with_entry(loc(0), loc(1), TravelSegment::reachable(10.0, 100.0, -10.0))
        .with_entry(loc(1), loc(3), TravelSegment::reachable(100.0, 1000.0, -100.0))
        .with_entry(loc(3), loc(4), TravelSegment::reachable(10.0, 100.0, -10.0))
        // pair (0,2) FIFO: O0->O2, O2->D0, D0->D2 (O2->D0 and D0->D2 are also
        // the degree-3 extension's legs 3 and 4, see below)
        .with_entry(loc(0), loc(2), TravelSegment::reachable(10.0, 100.0, -10.0))
        .with_entry(loc(2), loc(3), TravelSegment::reachable(90.0, 900.0, -90.0))
        .with_entry(loc(3), loc(5), TravelSegment::reachable(10.0, 100.0, -10.0))
        // pair (1,2) LIFO: O1->O2, O2->D2, D2->D1 (O1->O2 and D2->D1 are also
        // the degree-3 extension's legs 2 and 5)
        .with_entry(loc(1), loc(2), TravelSegment::reachable(10.0, 100.0, -10.0))
        .with_entry(loc(2), loc(5), TravelSegment::reachable(100.0, 1000.0, -100.0))
        .with_entry(loc(5), loc(4), TravelSegment::reachable(10.0, 100.0, -10.0))
}

#[test]
fn scenario_e_degree_three_extension_can_produce_mixed() {
    let requests = scenario_e_requests();
    let router = scenario_e_router();

    let engine = EngineBuilder::new(config(100.0, 3), requests, router, ZeroScorer).build().unwrap();
    let rides = engine.run(&mut NoopObserver);

    assert!(rides.len() >= 3, "singles must always be produced");
    let degree_three: Vec<_> = rides.iter().filter(|r| r.degree == 3).collect();
    assert!(
        degree_three.iter().any(|r| r.kind == RideKind::Mixed
            && r.destinations_ordered_requests == vec![0, 2, 1]),
        "expected a MIXED degree-3 ride dropping off 0, then 2, then 1, got {degree_three:#?}"
    );
}

// ── Scenario F — determinism under thread count ────────────────────────────

#[test]
fn scenario_f_determinism_across_parallelism() {
    let requests = scenario_e_requests();

    let engine_one = EngineBuilder::new(config(100.0, 3), requests.clone(), scenario_e_router(), ZeroScorer)
        .build()
        .unwrap();
    let rides_one = engine_one.run(&mut NoopObserver);

    let mut cfg_eight = config(100.0, 3);
    cfg_eight.parallelism = 8;
    let engine_eight = EngineBuilder::new(cfg_eight, requests, scenario_e_router(), ZeroScorer)
        .build()
        .unwrap();
    let rides_eight = engine_eight.run(&mut NoopObserver);

    assert_eq!(rides_one, rides_eight);
}
