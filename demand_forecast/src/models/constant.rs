//! Model that ignores its features

use crate::error::Result;
use crate::features::FeatureVector;
use crate::models::DemandModel;

/// Predicts the same value for every input
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantModel {
    name: String,
    value: f64,
}

impl ConstantModel {
    pub fn new(value: f64) -> Self {
        Self {
            name: format!("Constant ({})", value),
            value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl DemandModel for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
