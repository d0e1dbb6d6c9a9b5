use std::path::PathBuf;

use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::encoder::UnknownCategory;

/// Startup failure while loading the model or an encoder.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("artifact {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub(crate) fn corrupt(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Failure of a single prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("classifier invocation failed: {0}")]
    ClassifierInvocation(#[from] ClassifierError),
}
