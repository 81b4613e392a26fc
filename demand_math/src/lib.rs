//! # Demand Math
//!
//! Numeric building blocks for demand forecasting.
//! This crate provides the fixed-capacity rolling window used to derive
//! lag and rolling-statistic features from a target series.

use thiserror::Error;

pub mod window;

pub use window::RollingWindow;

/// Errors that can occur in rolling-window calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for demand math operations
pub type Result<T> = std::result::Result<T, MathError>;
