//! Per-geography monthly series and the extractor that builds them

use crate::data::FeatureRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// The unit of forecasting: a normalized (state, district) pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeographyId {
    pub state: String,
    pub district: String,
}

impl GeographyId {
    /// Create an identifier, normalizing case and whitespace
    pub fn new(state: &str, district: &str) -> Self {
        Self {
            state: normalize(state),
            district: normalize(district),
        }
    }
}

impl std::fmt::Display for GeographyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.state, self.district)
    }
}

/// Collapse runs of whitespace and uppercase, so raw-feed spelling
/// variants of the same district map to one key
fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// One observed month of activity for a geography
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySeriesPoint {
    /// Calendar month, represented as its first day
    pub month: NaiveDate,
    /// Non-negative activity count for that month
    pub value: f64,
}

/// Chronologically ordered monthly observations for one geography.
///
/// Gaps between months are tolerated and never interpolated. At most one
/// point exists per month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographySeries {
    points: Vec<MonthlySeriesPoint>,
}

impl GeographySeries {
    /// Build a series from unordered points, sorting by month and summing
    /// duplicate months
    pub fn from_points(points: Vec<MonthlySeriesPoint>) -> Self {
        let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for point in points {
            *by_month.entry(point.month).or_insert(0.0) += point.value;
        }

        Self {
            points: by_month
                .into_iter()
                .map(|(month, value)| MonthlySeriesPoint { month, value })
                .collect(),
        }
    }

    /// Get the ordered points
    pub fn points(&self) -> &[MonthlySeriesPoint] {
        &self.points
    }

    /// Get the values in chronological order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Number of observed months
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent observed month, if any
    pub fn last_month(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.month)
    }
}

/// Group feature rows into one chronologically sorted series per geography.
///
/// Duplicate (geography, month) rows are summed, matching the upstream
/// monthly aggregation. A geography with a single point is valid output.
pub fn extract_series(rows: &[FeatureRow]) -> BTreeMap<GeographyId, GeographySeries> {
    let mut grouped: BTreeMap<GeographyId, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for row in rows {
        *grouped
            .entry(row.geography.clone())
            .or_default()
            .entry(row.month)
            .or_insert(0.0) += row.value;
    }

    grouped
        .into_iter()
        .map(|(geography, by_month)| {
            let points = by_month
                .into_iter()
                .map(|(month, value)| MonthlySeriesPoint { month, value })
                .collect();
            (geography, GeographySeries { points })
        })
        .collect()
}
