//! Windowed local trend estimation for a single geography

use crate::stats::ols_slope;
use statrs::statistics::Statistics;

/// Number of most recent observations used for the local fit
pub const LOCAL_WINDOW: usize = 12;

/// Fractional per-month growth fitted over the most recent window of a
/// geography's working series.
///
/// Returns 0.0 when the window has fewer than 3 points. The window mean is
/// floored at 1 so zero and near-zero series cannot blow up the ratio.
pub fn local_growth(values: &[f64]) -> f64 {
    let start = values.len().saturating_sub(LOCAL_WINDOW);
    let window = &values[start..];
    if window.len() < 3 {
        return 0.0;
    }

    let mean = window.mean().max(1.0);
    ols_slope(window) / mean
}
