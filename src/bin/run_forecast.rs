//! Batch entry point: forecast every configured metric

use district_forecast::{ForecastConfig, Forecaster};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ForecastConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => ForecastConfig::default(),
    };

    match Forecaster::new(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("forecast run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
