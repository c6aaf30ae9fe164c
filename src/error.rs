//! Error types for the district_forecast crate

use thiserror::Error;

/// Custom error types for the district_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A required column is missing from an input table
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// A single geography's projection could not be completed
    #[error("Projection error: {0}")]
    ProjectionError(String),

    /// Error building the worker pool
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV reading or writing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error parsing a JSON configuration file
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
