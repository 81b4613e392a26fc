//! # DemandOwl
//!
//! `demand_owl` bundles the DemandOwl workspace crates behind one dependency:
//!
//! - [`math`]: fixed-capacity rolling windows and their statistics
//! - [`forecast`]: iterative hourly electricity demand forecasting
//!
//! ## Example
//!
//! ```
//! use demand_owl::forecast::models::ConstantModel;
//! use demand_owl::forecast::utils::parse_start;
//! use demand_owl::forecast::run_forecast;
//!
//! let start = parse_start("2025-01-01", 0).unwrap();
//! let run = run_forecast(start, 2, 1500.0, 30.0, 50.0, &ConstantModel::new(1000.0)).unwrap();
//!
//! assert_eq!(run.len(), 2);
//! assert_eq!(run.state().short_window().len(), 24);
//! ```

pub use demand_forecast as forecast;
pub use demand_math as math;

pub use demand_forecast::{
    run_forecast, DemandModel, ForecastConfig, ForecastError, ForecastPoint, ForecastRequest,
    ForecastRun, Forecaster, WeatherConditions,
};
