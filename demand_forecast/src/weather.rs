//! Weather trajectories across a forecast horizon
//!
//! Temperature follows one full sine cycle over the horizon around the base
//! value. Humidity gets an independent uniform jitter per hour and is clamped
//! to the valid percentage range.

use crate::error::{ForecastError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default temperature swing around the base value
pub const DEFAULT_TEMPERATURE_AMPLITUDE: f64 = 3.0;

/// Default half-width of the humidity jitter
pub const DEFAULT_HUMIDITY_JITTER: f64 = 5.0;

/// Base weather for a location, before any per-hour variation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

impl WeatherConditions {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.temperature.is_finite() || !self.humidity.is_finite() {
            return Err(ForecastError::InvalidInput(format!(
                "Base weather must be finite (temperature={}, humidity={})",
                self.temperature, self.humidity
            )));
        }
        Ok(())
    }
}

impl Default for WeatherConditions {
    /// Conditions used when live weather is unavailable
    fn default() -> Self {
        Self {
            temperature: 30.0,
            humidity: 50.0,
        }
    }
}

/// Weather for one forecast hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherStep {
    pub temperature: f64,
    pub humidity: f64,
}

/// Per-hour weather for a whole horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherTrajectory {
    steps: Vec<WeatherStep>,
}

impl WeatherTrajectory {
    /// Wrap an externally supplied sequence of hourly weather
    pub fn from_steps(steps: Vec<WeatherStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[WeatherStep] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<WeatherStep> {
        self.steps.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Generates weather trajectories from base conditions
#[derive(Debug, Clone)]
pub struct WeatherTrajectoryGenerator {
    amplitude: f64,
    jitter: f64,
    seed: Option<u64>,
}

impl WeatherTrajectoryGenerator {
    /// Create a generator with the given temperature amplitude and humidity jitter
    pub fn new(amplitude: f64, jitter: f64) -> Result<Self> {
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Temperature amplitude must be a non-negative number".to_string(),
            ));
        }
        if !jitter.is_finite() || jitter < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Humidity jitter must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            amplitude,
            jitter,
            seed: None,
        })
    }

    /// Fix the random source so repeated runs produce the same humidity
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Produce `horizon` hourly steps around `base`
    pub fn generate(&self, base: WeatherConditions, horizon: usize) -> Result<WeatherTrajectory> {
        base.validate()?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // Uniform::new panics on an empty range
        let noise = (self.jitter > 0.0).then(|| Uniform::new(-self.jitter, self.jitter));

        let steps = (0..horizon)
            .map(|i| {
                let offset = noise.as_ref().map_or(0.0, |dist| dist.sample(&mut rng));
                WeatherStep {
                    temperature: base.temperature + self.amplitude * phase(i, horizon).sin(),
                    humidity: (base.humidity + offset).clamp(0.0, 100.0),
                }
            })
            .collect();

        Ok(WeatherTrajectory { steps })
    }
}

impl Default for WeatherTrajectoryGenerator {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_TEMPERATURE_AMPLITUDE,
            jitter: DEFAULT_HUMIDITY_JITTER,
            seed: None,
        }
    }
}

/// Evenly spaced angle over `[0, 2π]`, endpoint included
fn phase(index: usize, horizon: usize) -> f64 {
    if horizon <= 1 {
        return 0.0;
    }
    if index == horizon - 1 {
        return 2.0 * PI;
    }
    2.0 * PI * index as f64 / (horizon - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_trajectory_length() {
        let generator = WeatherTrajectoryGenerator::default().with_seed(Some(1));
        for horizon in [0, 1, 2, 48, 200] {
            let trajectory = generator
                .generate(WeatherConditions::default(), horizon)
                .unwrap();
            assert_eq!(trajectory.len(), horizon);
        }
    }

    #[test]
    fn test_temperature_endpoints_match() {
        let generator = WeatherTrajectoryGenerator::default().with_seed(Some(7));
        let trajectory = generator
            .generate(WeatherConditions::new(21.7, 60.0), 48)
            .unwrap();

        let first = trajectory.get(0).unwrap().temperature;
        let last = trajectory.get(47).unwrap().temperature;
        assert_abs_diff_eq!(first, 21.7);
        assert_abs_diff_eq!(first, last, epsilon = 1e-12);
    }

    #[test]
    fn test_temperature_peaks_at_quarter_cycle() {
        let generator = WeatherTrajectoryGenerator::new(3.0, 0.0).unwrap();
        // Five points cover 0, π/2, π, 3π/2, 2π
        let trajectory = generator
            .generate(WeatherConditions::new(30.0, 50.0), 5)
            .unwrap();
        let temps: Vec<f64> = trajectory.steps().iter().map(|s| s.temperature).collect();

        assert_abs_diff_eq!(temps[1], 33.0, epsilon = 1e-12);
        assert_abs_diff_eq!(temps[2], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(temps[3], 27.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_step_uses_base_temperature() {
        let generator = WeatherTrajectoryGenerator::default().with_seed(Some(3));
        let trajectory = generator
            .generate(WeatherConditions::new(25.0, 50.0), 1)
            .unwrap();
        assert_eq!(trajectory.get(0).unwrap().temperature, 25.0);
    }

    #[test]
    fn test_humidity_always_within_bounds() {
        for base in [-20.0, 0.0, 2.0, 50.0, 98.0, 100.0, 140.0] {
            let generator = WeatherTrajectoryGenerator::default();
            let trajectory = generator
                .generate(WeatherConditions::new(30.0, base), 500)
                .unwrap();
            for step in trajectory.steps() {
                assert!((0.0..=100.0).contains(&step.humidity));
            }
        }
    }

    #[test]
    fn test_humidity_jitter_width() {
        let generator = WeatherTrajectoryGenerator::default().with_seed(Some(11));
        let trajectory = generator
            .generate(WeatherConditions::new(30.0, 50.0), 1000)
            .unwrap();
        for step in trajectory.steps() {
            assert!(step.humidity >= 45.0 && step.humidity < 55.0);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = WeatherTrajectoryGenerator::default().with_seed(Some(42));
        let a = generator.generate(WeatherConditions::default(), 48).unwrap();
        let b = generator.generate(WeatherConditions::default(), 48).unwrap();
        assert_eq!(a, b);

        let other = WeatherTrajectoryGenerator::default().with_seed(Some(43));
        let c = other.generate(WeatherConditions::default(), 48).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(WeatherTrajectoryGenerator::new(-1.0, 5.0).is_err());
        assert!(WeatherTrajectoryGenerator::new(3.0, f64::NAN).is_err());

        let generator = WeatherTrajectoryGenerator::default();
        assert!(matches!(
            generator.generate(WeatherConditions::new(f64::INFINITY, 50.0), 4),
            Err(ForecastError::InvalidInput(_))
        ));
    }
}
