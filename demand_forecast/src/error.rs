//! Error types for the demand_forecast crate

use demand_math::MathError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Caller input rejected before any forecasting state is created
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model failed or produced an unusable value; the run is aborted
    #[error("Model invocation failed at step {step}: {reason}")]
    ModelInvocation {
        /// Zero-based forecast step that failed
        step: usize,
        /// Description of the failure
        reason: String,
    },

    /// Error from invalid configuration or model parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from rolling window operations
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV serialization
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(String),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    Polars(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// Build a model invocation error for the given step
    pub fn model_invocation(step: usize, reason: impl Into<String>) -> Self {
        ForecastError::ModelInvocation {
            step,
            reason: reason.into(),
        }
    }
}

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::Polars(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Json(err.to_string())
    }
}
