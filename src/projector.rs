//! Recursive multi-step projection for a single geography

use crate::error::{ForecastError, Result};
use crate::series::{GeographyId, GeographySeries};
use crate::trend::{combine, local_growth, GlobalTrendParameters};
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Default number of future months to project
pub const DEFAULT_HORIZON: usize = 6;

/// One forecast month for one geography, the engine's sole persisted output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    pub state: String,
    pub district: String,
    /// Forecast calendar month, first day
    pub month: NaiveDate,
    /// Rounded, non-negative projected count
    pub forecast_value: u64,
}

/// Project `horizon` consecutive months past the end of a geography's
/// historical series.
///
/// Each step refits the local trend on the working series (history plus the
/// unrounded predictions appended so far), blends it with the global rate
/// using the original real-observation count, and compounds on the unrounded
/// value. The emitted point carries the rounded value; the working series
/// keeps the continuous one.
pub fn project(
    geography: &GeographyId,
    series: &GeographySeries,
    horizon: usize,
    global: &GlobalTrendParameters,
) -> Result<Vec<ForecastPoint>> {
    if series.is_empty() {
        return Err(ForecastError::ProjectionError(
            "cannot project an empty series".to_string(),
        ));
    }

    // Frozen at the start of the run: synthetic points never raise confidence
    let n_observations = series.len();

    let mut working = series.values();
    let mut last = working[working.len() - 1];
    let mut month = series.last_month().ok_or_else(|| {
        ForecastError::ProjectionError("series has no last month".to_string())
    })?;

    let mut points = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        let local = local_growth(&working);
        let rate = combine(
            local,
            global.growth_rate,
            n_observations,
            global.lower_bound,
            global.upper_bound,
        );

        let next = (last * (1.0 + rate)).max(0.0);
        if !next.is_finite() {
            return Err(ForecastError::ProjectionError(format!(
                "non-finite value at growth rate {}",
                rate
            )));
        }

        month = month.checked_add_months(Months::new(1)).ok_or_else(|| {
            ForecastError::ProjectionError("forecast month out of range".to_string())
        })?;

        points.push(ForecastPoint {
            state: geography.state.clone(),
            district: geography.district.clone(),
            month,
            forecast_value: next.round() as u64,
        });

        working.push(next);
        last = next;
    }

    Ok(points)
}
