//! Startup loading of the classifier and its three label encoders.
//!
//! All artifacts live in one directory under fixed file names. Any missing or
//! unreadable file aborts the load; there is no partial mode.

use std::path::Path;

use tracing::info;

use crate::ArtifactError;
use crate::classifier::Classifier;
use crate::encoder::{CategoricalEncoder, EncoderDocument};
use crate::model::ModelDocument;

pub const MODEL_FILE: &str = "salary_model.json";
#[cfg(feature = "onnx")]
pub const ONNX_MODEL_FILE: &str = "salary_model.onnx";
pub const GENDER_FILE: &str = "le_gender.json";
pub const WORKCLASS_FILE: &str = "le_workclass.json";
pub const OCCUPATION_FILE: &str = "le_occupation.json";

/// The three categorical encoders, one per categorical form field.
#[derive(Debug, Clone)]
pub struct Encoders {
    pub gender: CategoricalEncoder,
    pub workclass: CategoricalEncoder,
    pub occupation: CategoricalEncoder,
}

impl Encoders {
    /// Encoders in form order: workclass, occupation, gender.
    pub fn iter(&self) -> impl Iterator<Item = &CategoricalEncoder> {
        [&self.workclass, &self.occupation, &self.gender].into_iter()
    }
}

/// Everything a prediction needs, loaded once per process.
pub struct Artifacts {
    pub encoders: Encoders,
    pub classifier: Box<dyn Classifier>,
}

impl Artifacts {
    /// Load encoders and classifier from `dir`.
    ///
    /// With the `onnx` feature, `salary_model.onnx` takes precedence over
    /// `salary_model.json` when both exist.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let encoders = Encoders {
            gender: load_encoder(&dir.join(GENDER_FILE), "gender")?,
            workclass: load_encoder(&dir.join(WORKCLASS_FILE), "workclass")?,
            occupation: load_encoder(&dir.join(OCCUPATION_FILE), "occupation")?,
        };
        let classifier = load_classifier(dir)?;

        info!(
            dir = %dir.display(),
            classifier = classifier.kind(),
            "loaded prediction artifacts"
        );
        Ok(Self {
            encoders,
            classifier,
        })
    }
}

/// Load one encoder document and tag it with its form field.
pub fn load_encoder(path: &Path, field: &str) -> Result<CategoricalEncoder, ArtifactError> {
    let bytes = read_artifact(path)?;
    let doc: EncoderDocument =
        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::corrupt(path, e))?;
    let encoder =
        CategoricalEncoder::new(field, doc.classes).map_err(|e| ArtifactError::corrupt(path, e))?;

    info!(field, classes = encoder.len(), path = %path.display(), "loaded encoder");
    Ok(encoder)
}

/// Load the classifier from `dir`.
pub fn load_classifier(dir: &Path) -> Result<Box<dyn Classifier>, ArtifactError> {
    #[cfg(feature = "onnx")]
    {
        let onnx_path = dir.join(ONNX_MODEL_FILE);
        if onnx_path.exists() {
            return Ok(Box::new(crate::onnx::OnnxClassifier::load(&onnx_path)?));
        }
    }

    let path = dir.join(MODEL_FILE);
    let bytes = read_artifact(&path)?;
    let doc: ModelDocument =
        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::corrupt(&path, e))?;
    let classifier = doc
        .into_classifier()
        .map_err(|e| ArtifactError::corrupt(&path, e))?;

    info!(kind = classifier.kind(), path = %path.display(), "loaded classifier");
    Ok(classifier)
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArtifactError::NotFound(path.to_path_buf()),
        _ => ArtifactError::corrupt(path, e),
    })
}
