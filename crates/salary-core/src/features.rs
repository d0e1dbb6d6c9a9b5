//! The classifier's input layout.
//!
//! The model was trained on columns in one specific order. Nothing at runtime
//! can detect a reordered vector: the classifier just returns a different (and
//! wrong) answer. [`FEATURE_ORDER`] is therefore the single source of truth for
//! the layout, and every conversion to a flat row goes through it.

use serde::{Deserialize, Serialize};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 8;

/// One input column of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Age,
    Workclass,
    EducationLevel,
    Occupation,
    Gender,
    CapitalGain,
    CapitalLoss,
    HoursPerWeek,
}

/// Column order used at training time.
pub const FEATURE_ORDER: [Feature; FEATURE_COUNT] = [
    Feature::Age,
    Feature::Workclass,
    Feature::EducationLevel,
    Feature::Occupation,
    Feature::Gender,
    Feature::CapitalGain,
    Feature::CapitalLoss,
    Feature::HoursPerWeek,
];

impl Feature {
    /// Column name in the training dataset.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Workclass => "workclass",
            Self::EducationLevel => "educational-num",
            Self::Occupation => "occupation",
            Self::Gender => "gender",
            Self::CapitalGain => "capital-gain",
            Self::CapitalLoss => "capital-loss",
            Self::HoursPerWeek => "hours-per-week",
        }
    }

    /// Position of this feature in a flat row.
    pub fn index(self) -> usize {
        FEATURE_ORDER
            .iter()
            .position(|&f| f == self)
            .unwrap_or_else(|| unreachable!("{self:?} missing from FEATURE_ORDER"))
    }

    /// Whether the value is an encoder code rather than a raw number.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Workclass | Self::Occupation | Self::Gender)
    }
}

/// A fully encoded classifier input.
///
/// Fields are named so callers cannot mix them up; [`to_array`](Self::to_array)
/// lays them out in [`FEATURE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub workclass: f64,
    pub education_level: f64,
    pub occupation: f64,
    pub gender: f64,
    pub capital_gain: f64,
    pub capital_loss: f64,
    pub hours_per_week: f64,
}

impl FeatureVector {
    /// Value of a single feature.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Age => self.age,
            Feature::Workclass => self.workclass,
            Feature::EducationLevel => self.education_level,
            Feature::Occupation => self.occupation,
            Feature::Gender => self.gender,
            Feature::CapitalGain => self.capital_gain,
            Feature::CapitalLoss => self.capital_loss,
            Feature::HoursPerWeek => self.hours_per_week,
        }
    }

    /// Flat row in training order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        FEATURE_ORDER.map(|f| self.get(f))
    }

    /// Rebuild from a flat row in training order.
    pub fn from_array(row: [f64; FEATURE_COUNT]) -> Self {
        let at = |f: Feature| row[f.index()];
        Self {
            age: at(Feature::Age),
            workclass: at(Feature::Workclass),
            education_level: at(Feature::EducationLevel),
            occupation: at(Feature::Occupation),
            gender: at(Feature::Gender),
            capital_gain: at(Feature::CapitalGain),
            capital_loss: at(Feature::CapitalLoss),
            hours_per_week: at(Feature::HoursPerWeek),
        }
    }
}
