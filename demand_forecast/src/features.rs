//! Feature construction for demand models
//!
//! Builds the exact feature vector a trained demand model expects from a
//! timestamp, the weather for that hour, and the current lag/rolling state.

use crate::error::{ForecastError, Result};
use crate::rolling::{RollingState, LONG_WINDOW, SHORT_WINDOW};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Model column names, in the order the model was trained with
pub const FEATURE_NAMES: [&str; 14] = [
    "hour",
    "dayofweek",
    "month",
    "year",
    "dayofyear",
    "weekofyear",
    "quarter",
    "is_weekend",
    "Temperature",
    "Humidity",
    "Demand_lag_24hr",
    "Demand_lag_168hrs",
    "Demand_rolling_mean_24hrs",
    "Demand_rolling_std_24hrs",
];

/// Inputs for a single model invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of week (0=Monday, 6=Sunday)
    pub day_of_week: u32,
    /// Month (1-12)
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Day of year (1-366)
    pub day_of_year: u32,
    /// ISO-8601 week number
    pub week_of_year: u32,
    /// Quarter (1-4)
    pub quarter: u32,
    /// 1 on Saturday or Sunday, 0 otherwise
    pub is_weekend: u8,
    /// Temperature for the hour
    pub temperature: f64,
    /// Relative humidity for the hour (0-100)
    pub humidity: f64,
    /// Demand 24 steps back
    pub demand_lag_24hr: f64,
    /// Demand 168 steps back
    pub demand_lag_168hrs: f64,
    /// Mean demand over the short window
    pub demand_rolling_mean_24hrs: f64,
    /// Population standard deviation of demand over the short window
    pub demand_rolling_std_24hrs: f64,
}

impl FeatureVector {
    /// Look up a feature by its model column name
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "hour" => self.hour as f64,
            "dayofweek" => self.day_of_week as f64,
            "month" => self.month as f64,
            "year" => self.year as f64,
            "dayofyear" => self.day_of_year as f64,
            "weekofyear" => self.week_of_year as f64,
            "quarter" => self.quarter as f64,
            "is_weekend" => self.is_weekend as f64,
            "Temperature" => self.temperature,
            "Humidity" => self.humidity,
            "Demand_lag_24hr" => self.demand_lag_24hr,
            "Demand_lag_168hrs" => self.demand_lag_168hrs,
            "Demand_rolling_mean_24hrs" => self.demand_rolling_mean_24hrs,
            "Demand_rolling_std_24hrs" => self.demand_rolling_std_24hrs,
            _ => return None,
        };
        Some(value)
    }

    /// Feature values ordered as [`FEATURE_NAMES`]
    pub fn to_vec(&self) -> Vec<f64> {
        FEATURE_NAMES
            .iter()
            .filter_map(|name| self.get(name))
            .collect()
    }
}

/// Builds feature vectors from calendar, weather and rolling state
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Build the features for `timestamp`.
    ///
    /// Lag and rolling values come from `state` as it stands, so callers must
    /// build before pushing the step's prediction.
    pub fn build(
        timestamp: NaiveDateTime,
        temperature: f64,
        humidity: f64,
        state: &RollingState,
    ) -> Result<FeatureVector> {
        let demand_lag_24hr = state.lag(SHORT_WINDOW).ok_or_else(|| {
            ForecastError::InvalidInput("Rolling state has no 24 hour lag".to_string())
        })?;
        let demand_lag_168hrs = state.lag(LONG_WINDOW).ok_or_else(|| {
            ForecastError::InvalidInput("Rolling state has no 168 hour lag".to_string())
        })?;

        let weekday = timestamp.weekday();
        let month = timestamp.month();

        Ok(FeatureVector {
            hour: timestamp.hour(),
            day_of_week: weekday.num_days_from_monday(),
            month,
            year: timestamp.year(),
            day_of_year: timestamp.ordinal(),
            week_of_year: timestamp.iso_week().week(),
            quarter: quarter_of(month),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun) as u8,
            temperature,
            humidity,
            demand_lag_24hr,
            demand_lag_168hrs,
            demand_rolling_mean_24hrs: state.mean()?,
            demand_rolling_std_24hrs: state.stddev()?,
        })
    }
}

fn quarter_of(month: u32) -> u32 {
    1 + (month - 1) / 3
}
