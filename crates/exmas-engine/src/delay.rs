//! Delay optimizer, shared by [`crate::pairs::PairGenerator`] and
//! [`crate::extend::RideExtender`].
//!
//! Finds a single additive shift `s` that centers the raw per-passenger
//! delays within their effective windows, or reports infeasibility.

/// Numeric tolerance for window-boundary comparisons (`ε = 1e-9` by default).
pub const EPSILON: f64 = 1e-9;

/// Result of [`optimize`]: the shifted, window-validated delays.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedDelays {
    pub delays: Vec<f64>,
}

/// Apply the centering-shift procedure.
///
/// `delays`, `eff_max_neg`, `eff_max_pos` are parallel, one entry per
/// passenger. Returns `None` on any infeasibility (collapsed window, empty
/// `[lower, upper]`, or a post-shift window overrun beyond `epsilon`).
pub fn optimize(
    delays: &[f64],
    eff_max_neg: &[f64],
    eff_max_pos: &[f64],
    epsilon: f64,
) -> Option<OptimizedDelays> {
    debug_assert_eq!(delays.len(), eff_max_neg.len());
    debug_assert_eq!(delays.len(), eff_max_pos.len());

    // Step 1 — feasibility precheck: a collapsed per-rider window is fatal.
    for p in 0..delays.len() {
        if eff_max_pos[p] < -eff_max_neg[p] {
            return None;
        }
    }

    // Step 2 — global shift bounds.
    let lower = delays
        .iter()
        .zip(eff_max_neg)
        .map(|(&d, &neg)| -d - neg)
        .fold(f64::NEG_INFINITY, f64::max);
    let upper = delays
        .iter()
        .zip(eff_max_pos)
        .map(|(&d, &pos)| pos - d)
        .fold(f64::INFINITY, f64::min);
    if lower > upper + epsilon {
        return None;
    }

    // Step 3 — centering shift, clipped into [lower, upper].
    let max_delay = delays.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_delay = delays.iter().cloned().fold(f64::INFINITY, f64::min);
    let center_shift = -(max_delay + min_delay) / 2.0;
    let shift = center_shift.clamp(lower, upper);

    // Step 4 — apply and re-validate every passenger with tolerance.
    let shifted: Vec<f64> = delays.iter().map(|&d| d + shift).collect();
    for p in 0..shifted.len() {
        if shifted[p] < -eff_max_neg[p] - epsilon || shifted[p] > eff_max_pos[p] + epsilon {
            return None;
        }
    }

    Some(OptimizedDelays { delays: shifted })
}
