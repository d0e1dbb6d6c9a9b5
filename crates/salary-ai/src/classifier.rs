//! The binary classifier seam.
//!
//! Implementations take one encoded [`FeatureVector`] and return a raw label.
//! Probability output is a separate capability: a model without it returns
//! `Ok(None)` from [`Classifier::predict_proba`].

use salary_core::{FeatureVector, InvalidLabel};
use thiserror::Error;

/// Tolerance on the sum of a probability row (ONNX backends work in `f32`).
const SUM_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error(transparent)]
    InvalidLabel(#[from] InvalidLabel),

    #[error("invalid probability output: {0}")]
    InvalidProbabilities(String),

    #[error("classifier backend error: {0}")]
    Backend(String),
}

/// Validated probability distribution over classes `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities([f64; 2]);

impl ClassProbabilities {
    /// Accept a row only if every entry is finite, within `[0, 1]`, and the row sums to 1.
    pub fn try_new(row: [f64; 2]) -> Result<Self, ClassifierError> {
        if row.iter().any(|p| !p.is_finite() || !(0.0..=1.0).contains(p)) {
            return Err(ClassifierError::InvalidProbabilities(format!(
                "entries out of range: {row:?}"
            )));
        }
        let sum = row[0] + row[1];
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ClassifierError::InvalidProbabilities(format!(
                "row sums to {sum}: {row:?}"
            )));
        }
        Ok(Self(row))
    }

    /// Accept a row of any length, requiring exactly two entries.
    pub fn from_slice(row: &[f64]) -> Result<Self, ClassifierError> {
        match row {
            &[p0, p1] => Self::try_new([p0, p1]),
            _ => Err(ClassifierError::InvalidProbabilities(format!(
                "expected 2 classes, got {}",
                row.len()
            ))),
        }
    }

    /// Probability mass on `label`; `None` for labels other than 0 and 1.
    pub fn of(&self, label: usize) -> Option<f64> {
        self.0.get(label).copied()
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }
}

/// A loaded, immutable binary classifier.
pub trait Classifier: Send + Sync {
    /// Short backend name for logs.
    fn kind(&self) -> &'static str;

    /// Raw label for a single row.
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;

    /// Class distribution for a single row, or `None` without probability support.
    fn predict_proba(
        &self,
        _features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        Ok(None)
    }

    /// Label and distribution for a single row.
    ///
    /// The default calls [`predict`](Self::predict) then
    /// [`predict_proba`](Self::predict_proba); backends that produce both from
    /// one evaluation override it.
    fn predict_with_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<(i64, Option<ClassProbabilities>), ClassifierError> {
        let label = self.predict(features)?;
        Ok((label, self.predict_proba(features)?))
    }
}
