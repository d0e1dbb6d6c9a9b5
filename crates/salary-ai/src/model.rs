//! Persisted classifier documents (`salary_model.json`).

use serde::Deserialize;
use thiserror::Error;

use crate::classifier::Classifier;

pub use crate::forest::ForestModel;
pub use crate::linear::LinearModel;

/// A model document that parses but cannot be evaluated safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidModel(pub String);

/// Top-level model document, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDocument {
    Forest(ForestModel),
    Linear(LinearModel),
}

impl ModelDocument {
    pub fn validate(&self) -> Result<(), InvalidModel> {
        match self {
            Self::Forest(m) => m.validate(),
            Self::Linear(m) => m.validate(),
        }
    }

    /// Validate and box as a [`Classifier`].
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>, InvalidModel> {
        self.validate()?;
        let classifier: Box<dyn Classifier> = match self {
            Self::Forest(m) => Box::new(m),
            Self::Linear(m) => Box::new(m),
        };
        Ok(classifier)
    }
}
