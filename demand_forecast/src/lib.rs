//! # Demand Forecast
//!
//! Iterative multi-step electricity demand forecasting.
//!
//! ## Features
//!
//! - Calendar, weather, lag and rolling-statistic feature construction
//! - Short (24h) and long (168h) rolling history seeded from a base demand
//! - Hour-by-hour forecasting where each prediction feeds the next step
//! - Fixed ±10% heuristic band around every prediction
//! - Weather trajectories with optional seeding for reproducible runs
//! - CSV and DataFrame export
//! - `demand-forecast` command line front end
//!
//! ## Quick Start
//!
//! ```rust
//! use demand_forecast::models::ConstantModel;
//! use demand_forecast::utils::parse_start;
//! use demand_forecast::{ForecastConfig, ForecastRequest, Forecaster, WeatherConditions};
//!
//! let start = parse_start("2025-01-01", 0)?;
//! let request = ForecastRequest::new(start, 1500.0)
//!     .with_horizon(24)
//!     .with_weather(WeatherConditions::new(30.0, 50.0));
//!
//! let forecaster = Forecaster::new(ForecastConfig::default().with_seed(7))?;
//! let run = forecaster.run(&request, &ConstantModel::new(1000.0))?;
//!
//! assert_eq!(run.len(), 24);
//! assert_eq!(run.latest().map(|p| p.upper()), Some(1100.0));
//! # Ok::<(), demand_forecast::ForecastError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod features;
pub mod forecast;
pub mod models;
pub mod rolling;
pub mod utils;
pub mod weather;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::error::{ForecastError, Result};
pub use crate::features::{FeatureBuilder, FeatureVector, FEATURE_NAMES};
pub use crate::forecast::{run_forecast, ForecastPoint, ForecastRequest, ForecastRun, Forecaster};
pub use crate::models::DemandModel;
pub use crate::rolling::RollingState;
pub use crate::weather::{WeatherConditions, WeatherTrajectory, WeatherTrajectoryGenerator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
