//! Linear regression over named features
//!
//! Coefficients come from an already trained model, stored as JSON:
//!
//! ```json
//! {
//!   "name": "delhi-2024",
//!   "intercept": 120.0,
//!   "coefficients": { "Temperature": 35.5, "Demand_lag_24hr": 0.6 }
//! }
//! ```

use crate::error::{ForecastError, Result};
use crate::features::{FeatureVector, FEATURE_NAMES};
use crate::models::DemandModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Trained linear model: `intercept + Σ coefficient[name] * feature[name]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default = "default_name")]
    name: String,
    intercept: f64,
    coefficients: BTreeMap<String, f64>,
}

fn default_name() -> String {
    "Linear".to_string()
}

impl LinearModel {
    /// Create a linear model, rejecting coefficients for unknown features
    pub fn new(intercept: f64, coefficients: BTreeMap<String, f64>) -> Result<Self> {
        let model = Self {
            name: default_name(),
            intercept,
            coefficients,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load a model from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &BTreeMap<String, f64> {
        &self.coefficients
    }

    fn validate(&self) -> Result<()> {
        if !self.intercept.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "Intercept must be finite".to_string(),
            ));
        }

        for (name, weight) in &self.coefficients {
            if !FEATURE_NAMES.contains(&name.as_str()) {
                return Err(ForecastError::InvalidParameter(format!(
                    "Unknown feature '{}' in model coefficients",
                    name
                )));
            }
            if !weight.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "Coefficient for '{}' must be finite",
                    name
                )));
            }
        }

        Ok(())
    }
}

impl DemandModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.coefficients
            .iter()
            .try_fold(self.intercept, |acc, (name, weight)| {
                let value = features.get(name).ok_or_else(|| {
                    ForecastError::InvalidParameter(format!(
                        "Feature '{}' is not provided by the feature builder",
                        name
                    ))
                })?;
                Ok(acc + weight * value)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureBuilder;
    use crate::rolling::RollingState;
    use chrono::NaiveDate;

    fn sample_features() -> FeatureVector {
        let timestamp = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        let state = RollingState::new(1500.0).unwrap();
        FeatureBuilder::build(timestamp, 30.0, 50.0, &state).unwrap()
    }

    #[test]
    fn test_predict_weighted_sum() {
        let mut coefficients = BTreeMap::new();
        coefficients.insert("Temperature".to_string(), 10.0);
        coefficients.insert("Demand_lag_24hr".to_string(), 0.5);
        coefficients.insert("hour".to_string(), 2.0);
        let model = LinearModel::new(100.0, coefficients).unwrap();

        // 100 + 10 * 30 + 0.5 * 1500 + 2 * 1
        assert_eq!(model.predict(&sample_features()).unwrap(), 1152.0);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "name": "delhi",
            "intercept": 50.0,
            "coefficients": { "Humidity": 2.0 }
        }"#;
        let model = LinearModel::from_json_str(json).unwrap();

        assert_eq!(model.name(), "delhi");
        assert_eq!(model.predict(&sample_features()).unwrap(), 150.0);
    }

    #[test]
    fn test_default_name() {
        let model =
            LinearModel::from_json_str(r#"{"intercept": 1.0, "coefficients": {}}"#).unwrap();
        assert_eq!(model.name(), "Linear");
        assert_eq!(model.predict(&sample_features()).unwrap(), 1.0);
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let json = r#"{"intercept": 0.0, "coefficients": { "WindSpeed": 1.0 }}"#;
        assert!(matches!(
            LinearModel::from_json_str(json),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LinearModel::from_json_str("{ not json"),
            Err(ForecastError::Json(_))
        ));
    }
}
