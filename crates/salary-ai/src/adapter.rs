//! Encode form input, assemble the feature row, and run the classifier.

use salary_core::{EmployeeInput, FeatureVector, IncomeCategory, PredictionResult};
use tracing::debug;

use crate::PredictError;
use crate::artifacts::{Artifacts, Encoders};
use crate::classifier::{Classifier, ClassifierError};

/// Joins the loaded encoders and classifier into a single `predict` call.
///
/// Holds no mutable state: share it behind an `Arc` for concurrent use.
pub struct InferenceAdapter {
    encoders: Encoders,
    classifier: Box<dyn Classifier>,
}

impl InferenceAdapter {
    pub fn new(artifacts: Artifacts) -> Self {
        Self {
            encoders: artifacts.encoders,
            classifier: artifacts.classifier,
        }
    }

    pub fn encoders(&self) -> &Encoders {
        &self.encoders
    }

    pub fn classifier_kind(&self) -> &'static str {
        self.classifier.kind()
    }

    /// Encode the categorical fields and lay the row out for the classifier.
    ///
    /// Numeric fields are taken as-is; range clamping belongs to the form.
    pub fn encode(&self, input: &EmployeeInput) -> Result<FeatureVector, PredictError> {
        let workclass = self.encoders.workclass.encode(&input.workclass)?;
        let occupation = self.encoders.occupation.encode(&input.occupation)?;
        let gender = self.encoders.gender.encode(&input.gender)?;

        Ok(FeatureVector {
            age: f64::from(input.age),
            workclass: workclass as f64,
            education_level: f64::from(input.education_level),
            occupation: occupation as f64,
            gender: gender as f64,
            capital_gain: input.capital_gain as f64,
            capital_loss: input.capital_loss as f64,
            hours_per_week: f64::from(input.hours_per_week),
        })
    }

    /// Predict the income band for one employee.
    ///
    /// Confidence is the probability of the predicted class, or `None` when
    /// the classifier has no probability output.
    pub fn predict(&self, input: &EmployeeInput) -> Result<PredictionResult, PredictError> {
        let features = self.encode(input)?;
        self.predict_features(&features)
    }

    /// Predict from a row already built by [`encode`](Self::encode).
    pub fn predict_features(
        &self,
        features: &FeatureVector,
    ) -> Result<PredictionResult, PredictError> {
        let (label, proba) = self.classifier.predict_with_proba(features)?;
        let category = IncomeCategory::from_label(label).map_err(ClassifierError::from)?;

        let confidence = match proba {
            Some(proba) => Some(proba.of(category.label()).ok_or_else(|| {
                ClassifierError::InvalidProbabilities(format!("no entry for label {label}"))
            })?),
            None => None,
        };

        debug!(
            category = category.as_str(),
            confidence = ?confidence,
            classifier = self.classifier.kind(),
            "prediction"
        );
        Ok(PredictionResult {
            category,
            confidence,
        })
    }
}
