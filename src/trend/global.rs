//! Cross-region growth estimation from the national aggregate series

use crate::data::FeatureRow;
use crate::stats::{differences, ols_slope, population_std_dev};
use chrono::NaiveDate;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Hard floor on the per-month growth rate. Fixed policy, not a tunable:
/// aggregate activity cannot plausibly shrink faster than 20% a month.
pub const GROWTH_FLOOR: f64 = -0.20;

/// Hard ceiling on the per-month growth rate. Fixed policy, not a tunable:
/// aggregate activity cannot plausibly grow faster than 30% a month.
pub const GROWTH_CEILING: f64 = 0.30;

/// Per-metric national trend, computed once per run and shared read-only
/// with every worker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTrendParameters {
    /// Dimensionless fractional growth per month of the national aggregate
    pub growth_rate: f64,
    /// Lowest growth rate any geography may be assigned
    pub lower_bound: f64,
    /// Highest growth rate any geography may be assigned
    pub upper_bound: f64,
}

impl GlobalTrendParameters {
    /// Estimate national growth and volatility bounds from the full feature
    /// table of one metric, summing values by month across all geographies
    pub fn estimate(rows: &[FeatureRow]) -> Self {
        let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for row in rows {
            *by_month.entry(row.month).or_insert(0.0) += row.value;
        }

        let aggregate: Vec<f64> = by_month.into_values().collect();
        Self::from_aggregate(&aggregate)
    }

    /// Estimate from an already-aggregated national monthly series.
    ///
    /// Fewer than 3 months yields zero growth; fewer than 2 months yields
    /// bounds of exactly the policy floor and ceiling. Otherwise the growth
    /// rate is the OLS slope over the month index divided by the aggregate
    /// mean, and the bounds are two standard deviations of the
    /// month-over-month differences, relative to the mean, clipped to the
    /// policy floor and ceiling.
    pub fn from_aggregate(aggregate: &[f64]) -> Self {
        // Floored at 1 so an all-zero aggregate stays finite
        let mean = if aggregate.is_empty() {
            1.0
        } else {
            aggregate.mean().max(1.0)
        };

        let growth_rate = if aggregate.len() < 3 {
            0.0
        } else {
            ols_slope(aggregate) / mean
        };

        let diffs = differences(aggregate);
        let (lower_bound, upper_bound) = if diffs.is_empty() {
            (GROWTH_FLOOR, GROWTH_CEILING)
        } else {
            let sigma = population_std_dev(&diffs) / mean;
            ((-2.0 * sigma).max(GROWTH_FLOOR), (2.0 * sigma).min(GROWTH_CEILING))
        };

        Self {
            growth_rate,
            lower_bound,
            upper_bound,
        }
    }

    /// Neutral parameters: zero growth with the policy floor and ceiling
    pub fn neutral() -> Self {
        Self {
            growth_rate: 0.0,
            lower_bound: GROWTH_FLOOR,
            upper_bound: GROWTH_CEILING,
        }
    }
}
