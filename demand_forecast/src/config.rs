//! Forecast configuration

use crate::error::{ForecastError, Result};
use crate::weather::{DEFAULT_HUMIDITY_JITTER, DEFAULT_TEMPERATURE_AMPLITUDE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of hours to forecast
pub const DEFAULT_HORIZON_HOURS: usize = 48;

/// Tunable settings for a forecast run.
///
/// The band multipliers give a fixed percentage envelope around each
/// prediction. They are a display heuristic, not a calibrated interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of hourly steps to forecast
    pub horizon_hours: usize,
    /// Temperature swing applied over the horizon
    pub temperature_amplitude: f64,
    /// Half-width of the uniform humidity jitter
    pub humidity_jitter: f64,
    /// Upper bound multiplier applied to each prediction
    pub upper_band_multiplier: f64,
    /// Lower bound multiplier applied to each prediction
    pub lower_band_multiplier: f64,
    /// Seed for the humidity jitter; `None` draws fresh entropy per run
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_hours: DEFAULT_HORIZON_HOURS,
            temperature_amplitude: DEFAULT_TEMPERATURE_AMPLITUDE,
            humidity_jitter: DEFAULT_HUMIDITY_JITTER,
            upper_band_multiplier: 1.10,
            lower_band_multiplier: 0.90,
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a configuration from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_horizon(mut self, horizon_hours: usize) -> Self {
        self.horizon_hours = horizon_hours;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.horizon_hours == 0 {
            return Err(ForecastError::InvalidInput(
                "Horizon must be at least one hour".to_string(),
            ));
        }

        if !self.temperature_amplitude.is_finite() || self.temperature_amplitude < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Temperature amplitude must be a non-negative number".to_string(),
            ));
        }

        if !self.humidity_jitter.is_finite() || self.humidity_jitter < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Humidity jitter must be a non-negative number".to_string(),
            ));
        }

        if !self.lower_band_multiplier.is_finite()
            || !self.upper_band_multiplier.is_finite()
            || self.lower_band_multiplier > self.upper_band_multiplier
        {
            return Err(ForecastError::InvalidParameter(format!(
                "Band multipliers must be finite with lower <= upper (lower={}, upper={})",
                self.lower_band_multiplier, self.upper_band_multiplier
            )));
        }

        Ok(())
    }
}
