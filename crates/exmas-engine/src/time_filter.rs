//! `TimeFilter` — pre-sorted index over request times.

use exmas_core::{EngineError, EngineResult, Request, RequestId};

/// Pre-sorted index over request times; supplies candidate windows for
/// [`crate::pairs::PairGenerator`] in `O(log n)` per query.
///
/// Read-only after construction; safe to share across threads.
pub struct TimeFilter {
    /// `(request_time, index)` pairs sorted ascending by `request_time`.
    by_time: Vec<(f64, RequestId)>,
    /// `request_time`, dense by `RequestId`, for O(1) lookup of a given
    /// request's own time before the window search.
    request_time: Vec<f64>,
}

impl TimeFilter {
    /// Build from the request slice in `O(N log N)` by sorting a copy by
    /// `requestTime`.
    pub fn new(requests: &[Request]) -> Self {
        let mut by_time: Vec<(f64, RequestId)> =
            requests.iter().map(|r| (r.request_time, r.index)).collect();
        by_time.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut request_time = vec![0.0; requests.len()];
        for r in requests {
            request_time[r.index.index()] = r.request_time;
        }

        Self { by_time, request_time }
    }

    /// Validate `horizon`: `0` is legal ("no temporal pairing"); negative is
    /// a configuration error.
    pub fn validate_horizon(horizon: f64) -> EngineResult<()> {
        if horizon < 0.0 {
            return Err(EngineError::Configuration(format!(
                "horizon must be >= 0, got {horizon}"
            )));
        }
        Ok(())
    }

    /// Indices `j != i` with `|requestTime[i] - requestTime[j]| <= horizon`,
    /// in ascending `requestTime` order. `horizon == 0.0` always returns
    /// empty.
    pub fn candidates(&self, i: RequestId, horizon: f64) -> Vec<RequestId> {
        if horizon == 0.0 {
            return Vec::new();
        }

        let Some(&t_i) = self.request_time.get(i.index()) else {
            return Vec::new();
        };

        let lo = t_i - horizon;
        let hi = t_i + horizon;
        let start = self.by_time.partition_point(|(t, _)| *t < lo);

        self.by_time[start..]
            .iter()
            .take_while(|(t, _)| *t <= hi)
            .filter(|(_, id)| *id != i)
            .map(|(_, id)| *id)
            .collect()
    }
}
