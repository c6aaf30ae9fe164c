//! Per-metric orchestration and the parallel per-geography fan-out

use crate::config::{ForecastConfig, MetricTask};
use crate::data::DataLoader;
use crate::error::{ForecastError, Result};
use crate::projector::{project, ForecastPoint};
use crate::series::{extract_series, GeographyId, GeographySeries};
use crate::trend::GlobalTrendParameters;
use crate::writer::write_forecast;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::thread;
use tracing::{error, info, warn};

/// Worker pool size: every available core minus one kept for the OS
pub fn worker_count() -> usize {
    let cores = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    cores.saturating_sub(1).max(1)
}

/// Run every geography through the projector on a bounded worker pool.
///
/// Each geography is an independent unit of work sharing only the read-only
/// global parameters. A geography whose projection fails contributes zero
/// points; its identity and the cause are logged and the remaining workers
/// are unaffected. Months within one geography come back strictly ascending;
/// no order is guaranteed across geographies.
pub fn forecast_all(
    series_map: &BTreeMap<GeographyId, GeographySeries>,
    horizon: usize,
    global: &GlobalTrendParameters,
) -> Result<Vec<ForecastPoint>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count())
        .build()
        .map_err(|e| ForecastError::ThreadPoolError(e.to_string()))?;

    let entries: Vec<(&GeographyId, &GeographySeries)> = series_map.iter().collect();

    let forecasts = pool.install(|| {
        entries
            .into_par_iter()
            .flat_map(|(geography, series)| {
                match project(geography, series, horizon, global) {
                    Ok(points) => points,
                    Err(e) => {
                        warn!(
                            state = %geography.state,
                            district = %geography.district,
                            "projection failed: {}", e
                        );
                        Vec::new()
                    }
                }
            })
            .collect::<Vec<_>>()
    });

    Ok(forecasts)
}

/// Batch forecaster: one pass over every configured metric
#[derive(Debug)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Create a forecaster with the given settings
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Forecast every configured metric.
    ///
    /// A metric whose feature table is absent is skipped; a metric that
    /// fails (schema or IO) is logged and the remaining metrics still run.
    pub fn run(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.forecasts_dir)?;

        for task in &self.config.metrics {
            let input = self.config.features_dir.join(&task.features_file);
            if !input.exists() {
                info!(
                    metric = %task.name,
                    path = %input.display(),
                    "feature table missing, skipping metric"
                );
                continue;
            }

            if let Err(e) = self.run_metric(task, &input) {
                error!(metric = %task.name, "metric failed: {}", e);
            }
        }

        Ok(())
    }

    /// Forecast a single metric end to end
    fn run_metric(&self, task: &MetricTask, input: &Path) -> Result<()> {
        let rows = DataLoader::from_csv(input, &task.value_column)?;
        let global = GlobalTrendParameters::estimate(&rows);
        let series_map = extract_series(&rows);

        info!(
            metric = %task.name,
            geographies = series_map.len(),
            workers = worker_count(),
            "fanning out projection"
        );

        let forecasts = forecast_all(&series_map, self.config.horizon, &global)?;

        let output = self.config.forecasts_dir.join(&task.forecast_file);
        write_forecast(&output, &forecasts)?;

        if !forecasts.is_empty() {
            info!(
                metric = %task.name,
                rows = forecasts.len(),
                path = %output.display(),
                "forecast written"
            );
        }

        Ok(())
    }
}
