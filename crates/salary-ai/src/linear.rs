//! Linear classifier: `d = w·x + b`, label 1 iff `d > 0`.
//!
//! Logistic models carry `probability: true` and report `sigmoid(d)` for
//! class 1. Margin-only models (linear SVMs) have no probability output.

use salary_core::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

use crate::classifier::{ClassProbabilities, Classifier, ClassifierError};
use crate::model::InvalidModel;

#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub probability: bool,
}

impl LinearModel {
    pub fn validate(&self) -> Result<(), InvalidModel> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(InvalidModel(format!(
                "expected {FEATURE_COUNT} coefficients, got {}",
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(InvalidModel("non-finite coefficient".into()));
        }
        Ok(())
    }

    fn decision(&self, features: &FeatureVector) -> f64 {
        let row = features.to_array();
        self.coefficients
            .iter()
            .zip(row.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LinearModel {
    fn kind(&self) -> &'static str {
        if self.probability {
            "logistic"
        } else {
            "linear"
        }
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        Ok(if self.decision(features) > 0.0 { 1 } else { 0 })
    }

    fn predict_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        if !self.probability {
            return Ok(None);
        }
        let p1 = sigmoid(self.decision(features));
        ClassProbabilities::try_new([1.0 - p1, p1]).map(Some)
    }
}
