//! Statistical helpers shared by the trend estimators

use statrs::statistics::Statistics;

/// Ordinary least-squares slope of `values` regressed on the index `0..n-1`.
///
/// Returns 0.0 for fewer than two points or a degenerate design.
pub fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let t_mean = (n - 1) as f64 / 2.0;
    let y_mean = values.mean();

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (t, &y) in values.iter().enumerate() {
        let dt = t as f64 - t_mean;
        numerator += dt * (y - y_mean);
        denominator += dt * dt;
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// First differences of consecutive values
pub fn differences(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }

    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Population standard deviation; 0.0 for empty input
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.population_std_dev()
}
