//! The `Engine` struct — sequences phases, tracks ride indices, and enforces
//! termination at `maxDegree`.

use exmas_core::{EngineConfig, Request, Ride};
use exmas_graph::{GraphBuilder, ShareabilityGraph};
use exmas_oracle::{RoutingOracle, ScoringOracle};

use crate::observer::EngineObserver;
use crate::pairs::PairGenerator;
use crate::extend::RideExtender;
use crate::singles::SingleRideGenerator;
use crate::stats::{RejectionCounters, RejectionReason, RunSummary};
use crate::time_filter::TimeFilter;

/// The combination-enumeration engine.
///
/// Sequences [`SingleRideGenerator`] → [`PairGenerator`] →
/// [`exmas_graph::GraphBuilder`] → [`RideExtender`] (iterated up to
/// `config.max_degree`), returning one ordered ride list: singles first,
/// then pairs, then degree-3, and so on.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<Ro: RoutingOracle, Sc: ScoringOracle> {
    pub config: EngineConfig,
    pub requests: Vec<Request>,
    pub router: Ro,
    pub scorer: Sc,
}

impl<Ro: RoutingOracle, Sc: ScoringOracle> Engine<Ro, Sc> {
    /// Run every configured phase and return the complete ride list.
    ///
    /// Honors `config.parallelism` by running the whole phase sequence
    /// inside a dedicated Rayon thread pool — `0` means "use Rayon's global
    /// pool", covering all available cores.
    pub fn run<O: EngineObserver>(&self, observer: &mut O) -> Vec<Ride> {
        if self.config.parallelism == 0 {
            self.run_phases(observer)
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.parallelism)
                .build()
                .expect("failed to build the engine's worker pool");
            pool.install(|| self.run_phases(observer))
        }
    }

    fn run_phases<O: EngineObserver>(&self, observer: &mut O) -> Vec<Ride> {
        let counters = RejectionCounters::new();

        observer.on_phase_start(1);
        let singles = SingleRideGenerator::generate(&self.requests, &self.scorer);
        observer.on_phase_end(1, singles.len());

        let mut rides = singles;

        if self.config.max_degree >= 2 {
            let time_filter = TimeFilter::new(&self.requests);

            observer.on_phase_start(2);
            let next_index = rides.len() as u32;
            let pair_outcomes = PairGenerator::generate(
                &self.requests,
                &time_filter,
                self.config.horizon,
                &self.router,
                &self.scorer,
                self.config.epsilon,
                next_index,
                &counters,
            );

            let mut graph_builder = GraphBuilder::with_capacity(self.requests.len(), pair_outcomes.len());
            let mut pairs = Vec::with_capacity(pair_outcomes.len());
            for outcome in pair_outcomes {
                graph_builder.add_edge(outcome.source, outcome.candidate, outcome.ride.index, outcome.kind);
                pairs.push(outcome.ride);
            }
            let graph: ShareabilityGraph = graph_builder.build();
            observer.on_phase_end(2, pairs.len());

            rides.extend(pairs.iter().cloned());

            let mut base = pairs;
            let mut degree = 2;
            while degree < self.config.max_degree && !base.is_empty() {
                observer.on_phase_start(degree + 1);
                let next_index = rides.len() as u32;
                let extended = RideExtender::extend(
                    &base,
                    &graph,
                    &self.requests,
                    &self.router,
                    &self.scorer,
                    self.config.epsilon,
                    next_index,
                    &counters,
                );
                observer.on_phase_end(degree + 1, extended.len());

                if extended.is_empty() {
                    break;
                }

                rides.extend(extended.iter().cloned());
                base = extended;
                degree += 1;
            }
        }

        let summary = RunSummary {
            routing_attempts: self.router.attempts(),
            routing_failures: self.router.failures(),
            unreachable_leg: counters.count(RejectionReason::UnreachableLeg),
            window_violation: counters.count(RejectionReason::WindowViolation),
            budget_violation: counters.count(RejectionReason::BudgetViolation),
            duplicate_passenger: counters.count(RejectionReason::DuplicatePassenger),
            oracle_failure: counters.count(RejectionReason::OracleFailure),
        };
        summary.log();
        observer.on_run_end(&summary);

        rides
    }
}
