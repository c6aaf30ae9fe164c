//! Shrinkage blend of local and global growth rates

/// Observation count at which the local trend gets full weight
const FULL_CONFIDENCE_OBSERVATIONS: f64 = 7.0;

/// Blend a geography's local growth with the global rate by history length,
/// then clip the result to the global bounds.
///
/// `n_observations` is the number of real (non-synthetic) points the
/// geography had at the start of the run. A single observation gives the
/// local trend zero weight; seven or more give it full weight. Districts
/// with almost no history are pulled toward the national signal instead of
/// extrapolating from one or two points.
pub fn combine(local: f64, global: f64, n_observations: usize, lower: f64, upper: f64) -> f64 {
    let alpha = ((n_observations as f64 - 1.0) / (FULL_CONFIDENCE_OBSERVATIONS - 1.0))
        .clamp(0.0, 1.0);

    (alpha * local + (1.0 - alpha) * global).clamp(lower, upper)
}
