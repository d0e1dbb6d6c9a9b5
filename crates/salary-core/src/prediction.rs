//! Classifier output as presented to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Predicted income band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    /// Classifier label `1`: earns more than 50K.
    HighIncome,
    /// Classifier label `0`: earns 50K or less.
    LowIncome,
}

/// The classifier returned something other than `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("classifier label {0} is not binary")]
pub struct InvalidLabel(pub i64);

impl IncomeCategory {
    /// Map a raw binary classifier label.
    pub fn from_label(label: i64) -> Result<Self, InvalidLabel> {
        match label {
            1 => Ok(Self::HighIncome),
            0 => Ok(Self::LowIncome),
            other => Err(InvalidLabel(other)),
        }
    }

    /// Raw classifier label, also the index into a probability row.
    pub fn label(&self) -> usize {
        match self {
            Self::HighIncome => 1,
            Self::LowIncome => 0,
        }
    }

    /// Short band text, e.g. for a metric tile.
    pub fn band(&self) -> &'static str {
        match self {
            Self::HighIncome => "> 50K",
            Self::LowIncome => "<= 50K",
        }
    }

    /// One-sentence summary.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::HighIncome => "The employee is likely to earn more than 50K.",
            Self::LowIncome => "The employee is likely to earn 50K or less.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighIncome => "high_income",
            Self::LowIncome => "low_income",
        }
    }
}

/// Outcome of one prediction.
///
/// `confidence` is `None` when the classifier has no probability output.
/// `Some(0.0)` is a real value and is shown as such.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub category: IncomeCategory,
    pub confidence: Option<f64>,
}

impl PredictionResult {
    /// Confidence as a whole percentage for progress bars, capped at 100.
    pub fn confidence_percent(&self) -> Option<u8> {
        self.confidence
            .map(|p| (p * 100.0).floor().clamp(0.0, 100.0) as u8)
    }
}
