//! Iterative multi-step demand forecasting
//!
//! Each hourly step builds features from the calendar, the weather for that
//! hour and the current rolling state, asks the model for a prediction, wraps
//! it in a fixed percentage band and pushes it back into the rolling state.
//! Later steps therefore see earlier predictions as their lag and rolling
//! history, and any model bias compounds across the horizon.
//!
//! A run is all-or-nothing: if the model fails or returns a non-finite value
//! at any step, the whole run is aborted and no points are returned.

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::features::FeatureBuilder;
use crate::models::DemandModel;
use crate::rolling::RollingState;
use crate::utils::hourly_timestamps;
use crate::weather::{WeatherConditions, WeatherTrajectory, WeatherTrajectoryGenerator};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One forecast hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    timestamp: NaiveDateTime,
    predicted: f64,
    upper: f64,
    lower: f64,
}

impl ForecastPoint {
    fn new(timestamp: NaiveDateTime, predicted: f64, config: &ForecastConfig) -> Self {
        Self {
            timestamp,
            predicted,
            upper: predicted * config.upper_band_multiplier,
            lower: predicted * config.lower_band_multiplier,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn predicted(&self) -> f64 {
        self.predicted
    }

    /// Upper edge of the heuristic band
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Lower edge of the heuristic band
    pub fn lower(&self) -> f64 {
        self.lower
    }
}

/// Completed forecast: the points plus the rolling state they left behind
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRun {
    start: NaiveDateTime,
    horizon: usize,
    points: Vec<ForecastPoint>,
    state: RollingState,
}

impl ForecastRun {
    /// Timestamp the forecast starts from; the first point is one hour later
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Points in ascending timestamp order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Rolling state after the final step
    pub fn state(&self) -> &RollingState {
        &self.state
    }

    /// Point for the furthest forecast hour
    pub fn latest(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    pub fn predictions(&self) -> Vec<f64> {
        self.points.iter().map(ForecastPoint::predicted).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(ForecastPoint::timestamp).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Inputs describing one forecast invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Forecast starts one hour after this timestamp
    pub start: NaiveDateTime,
    /// Number of hourly steps; `None` uses the forecaster's configured horizon
    pub horizon_hours: Option<usize>,
    /// Demand used to seed the lag and rolling history
    pub base_demand: f64,
    /// Weather the trajectory varies around
    pub weather: WeatherConditions,
}

impl ForecastRequest {
    /// Request with the configured horizon and fallback weather
    pub fn new(start: NaiveDateTime, base_demand: f64) -> Self {
        Self {
            start,
            horizon_hours: None,
            base_demand,
            weather: WeatherConditions::default(),
        }
    }

    pub fn with_horizon(mut self, horizon_hours: usize) -> Self {
        self.horizon_hours = Some(horizon_hours);
        self
    }

    pub fn with_weather(mut self, weather: WeatherConditions) -> Self {
        self.weather = weather;
        self
    }

    fn validate(&self, horizon_hours: usize) -> Result<()> {
        if horizon_hours == 0 {
            return Err(ForecastError::InvalidInput(
                "Horizon must be at least one hour".to_string(),
            ));
        }

        if !self.base_demand.is_finite() || self.base_demand < 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "Base demand must be a non-negative number, got {}",
                self.base_demand
            )));
        }

        if !self.weather.temperature.is_finite() || !self.weather.humidity.is_finite() {
            return Err(ForecastError::InvalidInput(
                "Base weather must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Runs forecasts with a fixed configuration
///
/// A forecaster holds no per-run state, so one instance can serve many
/// concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Hours a request will forecast, falling back to the configured horizon
    pub fn horizon_for(&self, request: &ForecastRequest) -> usize {
        request.horizon_hours.unwrap_or(self.config.horizon_hours)
    }

    /// Forecast using a weather trajectory generated from the request's base weather
    pub fn run(&self, request: &ForecastRequest, model: &dyn DemandModel) -> Result<ForecastRun> {
        let horizon_hours = self.horizon_for(request);
        request.validate(horizon_hours)?;

        let trajectory = WeatherTrajectoryGenerator::new(
            self.config.temperature_amplitude,
            self.config.humidity_jitter,
        )?
        .with_seed(self.config.seed)
        .generate(request.weather, horizon_hours)?;

        self.run_with_trajectory(request, &trajectory, model)
    }

    /// Forecast using caller-supplied hourly weather.
    ///
    /// The trajectory must have exactly one step per forecast hour; the
    /// request's base weather is not used.
    pub fn run_with_trajectory(
        &self,
        request: &ForecastRequest,
        trajectory: &WeatherTrajectory,
        model: &dyn DemandModel,
    ) -> Result<ForecastRun> {
        let horizon_hours = self.horizon_for(request);
        request.validate(horizon_hours)?;
        if trajectory.len() != horizon_hours {
            return Err(ForecastError::InvalidInput(format!(
                "Weather trajectory has {} steps but the horizon is {} hours",
                trajectory.len(),
                horizon_hours
            )));
        }

        log::debug!(
            "Forecasting {} hours from {} with model '{}' (base demand {})",
            horizon_hours,
            request.start,
            model.name(),
            request.base_demand
        );

        let timestamps = hourly_timestamps(request.start, horizon_hours)?;
        let mut state = RollingState::new(request.base_demand)?;
        let mut points = Vec::with_capacity(horizon_hours);

        for (step, (&timestamp, weather)) in timestamps.iter().zip(trajectory.steps()).enumerate() {
            let features =
                FeatureBuilder::build(timestamp, weather.temperature, weather.humidity, &state)?;

            let predicted = model.predict(&features).map_err(|err| {
                log::warn!("Forecast aborted at step {}: {}", step, err);
                ForecastError::model_invocation(step, err.to_string())
            })?;
            if !predicted.is_finite() {
                log::warn!(
                    "Forecast aborted at step {}: model returned {}",
                    step,
                    predicted
                );
                return Err(ForecastError::model_invocation(
                    step,
                    format!("model returned non-finite value {}", predicted),
                ));
            }

            let point = ForecastPoint::new(timestamp, predicted, &self.config);
            log::trace!(
                "{} predicted={:.3} band=[{:.3}, {:.3}]",
                timestamp,
                point.predicted,
                point.lower,
                point.upper
            );
            points.push(point);

            state.push(predicted);
        }

        log::info!(
            "Forecast complete: {} points from {}",
            points.len(),
            request.start
        );

        Ok(ForecastRun {
            start: request.start,
            horizon: horizon_hours,
            points,
            state,
        })
    }
}

/// Forecast with the default configuration from positional inputs
pub fn run_forecast(
    start: NaiveDateTime,
    horizon_hours: usize,
    base_demand: f64,
    base_temperature: f64,
    base_humidity: f64,
    model: &dyn DemandModel,
) -> Result<ForecastRun> {
    let request = ForecastRequest::new(start, base_demand)
        .with_horizon(horizon_hours)
        .with_weather(WeatherConditions::new(base_temperature, base_humidity));

    Forecaster::default().run(&request, model)
}
