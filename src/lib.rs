//! # District Forecast
//!
//! A Rust library for projecting future monthly demand (enrolment and
//! record-update activity) for thousands of state/district geographies from
//! sparse historical monthly counts.
//!
//! ## Features
//!
//! - Per-geography monthly series extraction from flat feature tables
//! - A single cross-region growth rate with volatility-derived bounds
//! - Windowed local trend estimation per geography
//! - Shrinkage blending so thin histories borrow the national signal
//! - Recursive multi-step projection over a fixed horizon
//! - Parallel per-geography fan-out on a bounded worker pool
//! - CSV forecast artifacts for the downstream scoring stage and API
//!
//! ## Quick Start
//!
//! ```no_run
//! use district_forecast::{ForecastConfig, Forecaster};
//!
//! fn main() -> Result<(), district_forecast::ForecastError> {
//!     // Forecast every configured metric with the default settings
//!     let forecaster = Forecaster::new(ForecastConfig::default());
//!     forecaster.run()
//! }
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod projector;
pub mod series;
pub mod stats;
pub mod trend;
pub mod writer;

// Re-export commonly used types
pub use crate::config::{ForecastConfig, MetricTask};
pub use crate::data::{DataLoader, FeatureRow};
pub use crate::engine::{forecast_all, worker_count, Forecaster};
pub use crate::error::ForecastError;
pub use crate::projector::{project, ForecastPoint, DEFAULT_HORIZON};
pub use crate::series::{extract_series, GeographyId, GeographySeries, MonthlySeriesPoint};
pub use crate::trend::{combine, local_growth, GlobalTrendParameters};
pub use crate::writer::write_forecast;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
