//! Unit tests for exmas-core primitives.

#[cfg(test)]
mod ids {
    use crate::{Location, PaxId, RequestId};

    #[test]
    fn index_roundtrip() {
        let id = RequestId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RequestId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(RequestId(0) < RequestId(1));
        assert!(Location(100) > Location(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(RequestId::INVALID.0, u32::MAX);
        assert_eq!(PaxId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(RequestId(7).to_string(), "RequestId(7)");
    }

    #[test]
    fn pax_and_request_ids_do_not_compare_across_types() {
        // PaxId and RequestId are deliberately distinct wrapper types even
        // though both hold u32 — a rider sharing a ride under two requests
        // must never let the two ids be confused for one another.
        let r = RequestId(3);
        let p = PaxId(3);
        assert_eq!(r.index(), p.index());
    }
}

#[cfg(test)]
mod request {
    use crate::{Location, PaxId, Request, RequestId};

    #[allow(clippy::too_many_arguments)]
    fn make(
        earliest: f64,
        request_time: f64,
        latest: f64,
        direct_tt: f64,
        max_tt: f64,
    ) -> Result<Request, crate::CoreError> {
        Request::new(
            RequestId(0),
            PaxId(0),
            Location(0),
            Location(1),
            request_time,
            direct_tt,
            1000.0,
            max_tt,
            earliest,
            latest,
            0.0,
            0.0,
            10.0,
            5.0,
        )
    }

    #[test]
    fn accepts_a_feasible_request() {
        let r = make(0.0, 0.0, 60.0, 100.0, 110.0).unwrap();
        assert_eq!(r.max_negative_delay(), 0.0);
        assert_eq!(r.max_positive_delay(), 60.0);
    }

    #[test]
    fn rejects_a_window_that_cannot_fit_the_direct_trip() {
        let err = make(0.0, 0.0, 50.0, 100.0, 110.0).unwrap_err();
        match err {
            crate::CoreError::InfeasibleRequest(id) => assert_eq!(id.0, 0),
            other => panic!("expected InfeasibleRequest, got {other:?}"),
        }
    }

    #[test]
    fn delay_allowances_are_measured_from_request_time() {
        let r = make(-20.0, 0.0, 30.0, 10.0, 40.0).unwrap();
        assert_eq!(r.max_negative_delay(), 20.0);
        assert_eq!(r.max_positive_delay(), 30.0);
    }
}

#[cfg(test)]
mod segment {
    use crate::TravelSegment;

    #[test]
    fn unreachable_never_beats_a_reachable_segment() {
        let reachable = TravelSegment::reachable(100.0, 1000.0, -5.0);
        assert!(reachable.travel_time < TravelSegment::UNREACHABLE.travel_time);
        assert!(reachable.utility > TravelSegment::UNREACHABLE.utility);
        assert!(!TravelSegment::UNREACHABLE.is_reachable());
        assert!(reachable.is_reachable());
    }
}

#[cfg(test)]
mod config {
    use crate::EngineConfig;

    #[test]
    fn zero_horizon_is_valid() {
        let cfg = EngineConfig::new(0.0, 2, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_horizon_is_a_configuration_error() {
        let cfg = EngineConfig::new(-1.0, 2, 0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_max_degree_is_a_configuration_error() {
        let cfg = EngineConfig::new(60.0, 0, 0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_time_bin_size_is_a_configuration_error() {
        let mut cfg = EngineConfig::new(60.0, 2, 0);
        cfg.time_bin_size = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn time_bin_buckets_consistently() {
        let cfg = EngineConfig {
            horizon: 60.0,
            max_degree: 2,
            time_bin_size: 900.0,
            epsilon: 1e-9,
            parallelism: 0,
        };
        assert_eq!(cfg.time_bin(0.0), 0);
        assert_eq!(cfg.time_bin(899.0), 0);
        assert_eq!(cfg.time_bin(900.0), 1);
        assert_eq!(cfg.time_bin(1799.0), 1);
    }
}

#[cfg(test)]
mod ride {
    use crate::{Location, Ride, RideKind};

    fn single(index: u32) -> Ride {
        Ride {
            index: crate::RideId(index),
            degree: 1,
            kind: RideKind::Single,
            requests: vec![crate::RequestId(index)],
            origins_ordered: vec![Location(0)],
            destinations_ordered: vec![Location(1)],
            destinations_ordered_requests: vec![0],
            passenger_travel_time: vec![100.0],
            passenger_distance: vec![1000.0],
            passenger_network_utility: vec![-5.0],
            delay: vec![0.0],
            remaining_budget: vec![2.0],
            connection_travel_time: vec![100.0],
            connection_distance: vec![1000.0],
            connection_utility: vec![-5.0],
            ride_travel_time: 100.0,
            ride_distance: 1000.0,
            ride_utility: -5.0,
            start_time: 0.0,
            end_time: 100.0,
        }
    }

    #[test]
    fn shape_invariants_hold_for_a_well_formed_single() {
        let r = single(0);
        r.assert_shape_invariants();
        assert!(r.budget_accepted());
    }

    #[test]
    fn negative_remaining_budget_is_not_accepted() {
        let mut r = single(0);
        r.remaining_budget = vec![-0.01];
        assert!(!r.budget_accepted());
    }

    #[test]
    fn fifo_sorts_before_lifo_for_tiebreaking() {
        assert!(RideKind::Fifo.tiebreak_rank() < RideKind::Lifo.tiebreak_rank());
        assert!(RideKind::Lifo.tiebreak_rank() < RideKind::Mixed.tiebreak_rank());
    }
}
