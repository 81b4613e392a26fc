//! Regression models that map a feature vector to a demand prediction

use crate::error::Result;
use crate::features::FeatureVector;
use std::fmt::{self, Debug};

/// Trained demand model
///
/// Implementations are treated as pure functions: the same features must
/// give the same prediction, and a call must not depend on earlier calls.
pub trait DemandModel: Debug {
    /// Predict demand for one set of features
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Adapter turning a closure into a [`DemandModel`]
pub struct FnModel<F> {
    name: String,
    func: F,
}

impl<F> FnModel<F>
where
    F: Fn(&FeatureVector) -> Result<f64>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Debug for FnModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModel").field("name", &self.name).finish()
    }
}

impl<F> DemandModel for FnModel<F>
where
    F: Fn(&FeatureVector) -> Result<f64>,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (self.func)(features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub mod constant;
pub mod linear;

pub use constant::ConstantModel;
pub use linear::LinearModel;
