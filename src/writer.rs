//! Forecast serialization for the recommendation stage and the API

use crate::error::Result;
use crate::projector::ForecastPoint;
use std::path::Path;
use tracing::warn;

/// Write forecast points as a CSV table with columns
/// `state, district, month, forecast_value`.
///
/// An empty forecast still produces a headed zero-row file; that is logged
/// as a warning, not treated as an error, so other metrics can proceed.
pub fn write_forecast<P: AsRef<Path>>(path: P, points: &[ForecastPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(&path)?;

    if points.is_empty() {
        warn!(
            path = %path.as_ref().display(),
            "no forecasts produced for this metric"
        );
        // serialize() only emits the header alongside a record
        writer.write_record(["state", "district", "month", "forecast_value"])?;
    }

    for point in points {
        writer.serialize(point)?;
    }

    writer.flush()?;
    Ok(())
}
