use district_forecast::stats::{differences, ols_slope, population_std_dev};

#[test]
fn test_ols_slope_linear_series() {
    // Perfectly linear series recovers its step exactly
    let values = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    assert!((ols_slope(&values) - 10.0).abs() < 1e-12);
}

#[test]
fn test_ols_slope_growth_scenario() {
    // The national aggregate used in the trend tests: slope is 105
    let values = vec![1000.0, 1100.0, 1210.0];
    assert!((ols_slope(&values) - 105.0).abs() < 1e-9);
}

#[test]
fn test_ols_slope_constant_series() {
    let values = vec![7.0, 7.0, 7.0, 7.0];
    assert_eq!(ols_slope(&values), 0.0);
}

#[test]
fn test_ols_slope_short_series() {
    assert_eq!(ols_slope(&[]), 0.0);
    assert_eq!(ols_slope(&[42.0]), 0.0);
}

#[test]
fn test_differences() {
    let values = vec![1000.0, 1100.0, 1210.0];
    assert_eq!(differences(&values), vec![100.0, 110.0]);

    assert!(differences(&[500.0]).is_empty());
    assert!(differences(&[]).is_empty());
}

#[test]
fn test_population_std_dev() {
    // Population formula: sqrt(mean of squared deviations)
    let diffs = vec![100.0, 110.0];
    assert!((population_std_dev(&diffs) - 5.0).abs() < 1e-12);

    assert_eq!(population_std_dev(&[42.0]), 0.0);
    assert_eq!(population_std_dev(&[]), 0.0);
}
