//! Command line arguments and the input resolution behind `demand-forecast`

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::export::default_file_name;
use crate::models::{ConstantModel, DemandModel, LinearModel};
use crate::utils::parse_start;
use crate::weather::WeatherConditions;
use chrono::{Local, NaiveDateTime, Timelike};
use clap::Parser;
use std::path::PathBuf;

/// Forecast hourly electricity demand from a base demand and current weather
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Start hour (0-23); defaults to the current hour
    #[arg(long)]
    pub hour: Option<u32>,

    /// City the forecast is for; only used to name the export
    #[arg(long, default_value = "Delhi")]
    pub city: String,

    /// Demand used to seed the lag and rolling history
    #[arg(long, default_value_t = 1500.0)]
    pub base_demand: f64,

    /// Base temperature in °C; falls back to the default when absent
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Base relative humidity in %; falls back to the default when absent
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Number of hours to forecast (overrides the config file)
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Seed for the humidity jitter (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with a trained linear model
    #[arg(long, conflicts_with = "constant")]
    pub model: Option<PathBuf>,

    /// Predict this constant value at every step instead of loading a model
    #[arg(long)]
    pub constant: Option<f64>,

    /// CSV output path; defaults to <city>_electricity_forecast.csv
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

impl Cli {
    pub fn load_model(&self) -> Result<Box<dyn DemandModel>> {
        match (&self.model, self.constant) {
            (Some(path), _) => {
                let model = LinearModel::from_json_file(path)?;
                log::info!("Loaded model '{}' from {}", model.name(), path.display());
                Ok(Box::new(model))
            }
            (None, Some(value)) => Ok(Box::new(ConstantModel::new(value))),
            (None, None) => Err(ForecastError::InvalidInput(
                "Either --model or --constant is required".to_string(),
            )),
        }
    }

    /// File config with the command line overrides applied
    pub fn load_config(&self) -> Result<ForecastConfig> {
        let mut config = match &self.config {
            Some(path) => ForecastConfig::from_json_file(path)?,
            None => ForecastConfig::default(),
        };

        if let Some(horizon) = self.horizon {
            config = config.with_horizon(horizon);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn start_timestamp(&self) -> Result<NaiveDateTime> {
        self.start_timestamp_at(Local::now().naive_local())
    }

    /// Start time with any missing date or hour taken from `now`
    pub fn start_timestamp_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        let hour = self.hour.unwrap_or_else(|| now.hour());

        match &self.date {
            Some(date) => parse_start(date, hour),
            None => parse_start(&now.date().format("%Y-%m-%d").to_string(), hour),
        }
    }

    /// Base weather, filling gaps from [`WeatherConditions::default`]
    pub fn base_weather(&self) -> WeatherConditions {
        let fallback = WeatherConditions::default();
        if self.temperature.is_none() || self.humidity.is_none() {
            log::warn!("No live weather supplied for {}; using default values", self.city);
        }

        WeatherConditions::new(
            self.temperature.unwrap_or(fallback.temperature),
            self.humidity.unwrap_or(fallback.humidity),
        )
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file_name(&self.city)))
    }
}
