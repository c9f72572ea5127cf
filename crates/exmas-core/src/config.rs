//! Engine-wide configuration.
//!
//! A single value constructed once and validated eagerly: a plain data
//! record with no builder of its own — `exmas_engine::EngineBuilder` is the
//! fluent entry point that consumes it.

use crate::{CoreError, CoreResult};

/// Recognized engine-wide options.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Temporal pairing window in seconds, used by `TimeFilter`.
    /// `0.0` is valid ("no temporal pairing"); negative is a configuration
    /// error.
    pub horizon: f64,

    /// Upper bound on ride degree. `1` => singles only, `2` => singles +
    /// pairs, `>= 3` => iterative extension.
    pub max_degree: usize,

    /// Routing cache bin width, in seconds. Must be `> 0`.
    pub time_bin_size: f64,

    /// Numeric tolerance for delay-window feasibility checks.
    pub epsilon: f64,

    /// Worker thread count. `0` means "use all cores".
    pub parallelism: usize,
}

impl EngineConfig {
    /// Construct a config with the documented default `epsilon` (`1e-9`) and
    /// `time_bin_size` (`900` seconds), leaving the population-dependent
    /// fields (`horizon`, `max_degree`, `parallelism`) to the caller.
    pub fn new(horizon: f64, max_degree: usize, parallelism: usize) -> Self {
        Self {
            horizon,
            max_degree,
            time_bin_size: 900.0,
            epsilon: 1e-9,
            parallelism,
        }
    }

    /// Validate the cross-field invariants the rest of the engine relies on.
    ///
    /// A non-positive but non-zero horizon is a configuration error;
    /// `horizon == 0.0` is valid and means "no temporal pairing", not an
    /// error.
    pub fn validate(&self) -> CoreResult<()> {
        if self.horizon < 0.0 {
            return Err(CoreError::Configuration(format!(
                "horizon must be >= 0, got {}",
                self.horizon
            )));
        }
        if self.max_degree == 0 {
            return Err(CoreError::Configuration(
                "max_degree must be >= 1".to_string(),
            ));
        }
        if self.time_bin_size <= 0.0 {
            return Err(CoreError::Configuration(format!(
                "time_bin_size must be > 0, got {}",
                self.time_bin_size
            )));
        }
        if self.epsilon < 0.0 {
            return Err(CoreError::Configuration(format!(
                "epsilon must be >= 0, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Bucket a departure time into its routing-cache time bin.
    #[inline]
    pub fn time_bin(&self, departure_time: f64) -> i64 {
        (departure_time / self.time_bin_size).floor() as i64
    }
}
