//! Feature-table loading for the forecasting engine

use crate::error::{ForecastError, Result};
use crate::series::GeographyId;
use chrono::{Datelike, NaiveDate};
use std::path::Path;
use tracing::warn;

/// One parsed row of a monthly feature table
#[derive(Debug, Clone)]
pub struct FeatureRow {
    /// Normalized state/district pair
    pub geography: GeographyId,
    /// Calendar month, first day
    pub month: NaiveDate,
    /// Metric value for that month
    pub value: f64,
}

/// Loader for per-metric feature tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Read a feature table with columns `state, district, month` and the
    /// designated value column.
    ///
    /// A required column missing from the header is a schema error and fatal
    /// for the metric. A row whose month or value does not parse is dropped
    /// with a warning.
    pub fn from_csv<P: AsRef<Path>>(path: P, value_column: &str) -> Result<Vec<FeatureRow>> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let state_idx = column_index(&headers, "state")?;
        let district_idx = column_index(&headers, "district")?;
        let month_idx = column_index(&headers, "month")?;
        let value_idx = column_index(&headers, value_column)?;

        let mut rows = Vec::new();
        for (position, record) in reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1
            let line = position + 2;

            let month = match record.get(month_idx).and_then(parse_month) {
                Some(month) => month,
                None => {
                    warn!(line, "dropping row with missing or unparseable month");
                    continue;
                }
            };

            let value = match record
                .get(value_idx)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
            {
                Some(value) if value >= 0.0 && value.is_finite() => value,
                _ => {
                    warn!(line, column = value_column, "dropping row with invalid value");
                    continue;
                }
            };

            let state = record.get(state_idx).unwrap_or("");
            let district = record.get(district_idx).unwrap_or("");

            rows.push(FeatureRow {
                geography: GeographyId::new(state, district),
                month,
                value,
            });
        }

        Ok(rows)
    }
}

/// Find a column by case-insensitive name
fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            ForecastError::SchemaError(format!("required column '{}' not found", name))
        })
}

/// Parse a month cell and normalize it to the first day of its month.
///
/// Accepts ISO `YYYY-MM-DD` and the raw-feed `DD-MM-YYYY` format.
fn parse_month(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"))
        .ok()?;

    parsed.with_day(1)
}
