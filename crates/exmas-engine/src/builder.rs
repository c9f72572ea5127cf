//! Fluent builder for constructing an [`Engine`].

use exmas_core::{EngineConfig, Request};
use exmas_oracle::{RoutingOracle, ScoringOracle};

use crate::{Engine, EngineError, EngineResult};

/// Fluent builder for [`Engine<Ro, Sc>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — horizon, max degree, time-bin size, epsilon, parallelism
/// - `requests: Vec<Request>` — the request population, dense `[0, N)` by index
/// - `Ro: RoutingOracle` — e.g. [`exmas_oracle::CachedRoutingOracle`]
/// - `Sc: ScoringOracle` — e.g. [`exmas_oracle::LinearScorer`]
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(config, requests, router, scorer).build()?;
/// let rides = engine.run(&mut NoopObserver);
/// ```
pub struct EngineBuilder<Ro: RoutingOracle, Sc: ScoringOracle> {
    config: EngineConfig,
    requests: Vec<Request>,
    router: Ro,
    scorer: Sc,
}

impl<Ro: RoutingOracle, Sc: ScoringOracle> EngineBuilder<Ro, Sc> {
    pub fn new(config: EngineConfig, requests: Vec<Request>, router: Ro, scorer: Sc) -> Self {
        Self { config, requests, router, scorer }
    }

    /// Validate cross-field invariants and return a ready-to-run [`Engine`].
    pub fn build(self) -> EngineResult<Engine<Ro, Sc>> {
        self.config.validate()?;

        for (i, request) in self.requests.iter().enumerate() {
            if request.index.index() != i {
                return Err(EngineError::Configuration(format!(
                    "requests must be dense and sorted by index: position {i} holds index {}",
                    request.index
                )));
            }
        }

        Ok(Engine {
            config: self.config,
            requests: self.requests,
            router: self.router,
            scorer: self.scorer,
        })
    }
}
