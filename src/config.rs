//! Run settings for the batch forecaster

use crate::error::Result;
use crate::projector::DEFAULT_HORIZON;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// One metric to forecast: input table, value column, output artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTask {
    /// Short name used in logs
    pub name: String,
    /// Feature table file name, relative to the features directory
    pub features_file: String,
    /// Designated value column within the feature table
    pub value_column: String,
    /// Output file name, relative to the forecasts directory
    pub forecast_file: String,
}

impl MetricTask {
    /// Create a metric task
    pub fn new(name: &str, features_file: &str, value_column: &str, forecast_file: &str) -> Self {
        Self {
            name: name.to_string(),
            features_file: features_file.to_string(),
            value_column: value_column.to_string(),
            forecast_file: forecast_file.to_string(),
        }
    }
}

/// Settings for one batch forecasting run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Directory holding the per-metric feature tables
    pub features_dir: PathBuf,
    /// Directory the forecast artifacts are written to
    pub forecasts_dir: PathBuf,
    /// Number of future months to project per geography
    pub horizon: usize,
    /// Metrics to forecast, processed in order
    pub metrics: Vec<MetricTask>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            features_dir: PathBuf::from("data/features"),
            forecasts_dir: PathBuf::from("data/forecasts"),
            horizon: DEFAULT_HORIZON,
            metrics: vec![
                MetricTask::new(
                    "enrolment",
                    "enrolment_features.csv",
                    "total_enrolment",
                    "enrolment_forecast.csv",
                ),
                MetricTask::new(
                    "demographic",
                    "demographic_features.csv",
                    "total_updates",
                    "demographic_forecast.csv",
                ),
                MetricTask::new(
                    "biometric",
                    "biometric_features.csv",
                    "total_biometric",
                    "biometric_forecast.csv",
                ),
            ],
        }
    }
}

impl ForecastConfig {
    /// Load settings from a JSON file; absent fields fall back to defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
