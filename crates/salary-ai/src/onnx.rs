//! ONNX Runtime backend for classifiers exported with `skl2onnx`.
//!
//! Expects a graph with one `float32[1, 8]` input, an `int64` label as the
//! first output and, optionally, a `float32[1, 2]` probability tensor as the
//! second (export with `zipmap=False`).

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use salary_core::{FEATURE_COUNT, FeatureVector};
use tracing::info;

use crate::ArtifactError;
use crate::classifier::{ClassProbabilities, Classifier, ClassifierError};

/// Classifier backed by an ONNX Runtime session.
///
/// `Session::run` needs exclusive access, so the session sits behind a mutex.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    input_name: String,
    has_probabilities: bool,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let session = Session::builder()
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| ArtifactError::corrupt(path, e))?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .ok_or_else(|| ArtifactError::corrupt(path, "model has no inputs"))?;
        let has_probabilities = session.outputs().len() > 1;

        info!(
            model = %path.display(),
            input = %input_name,
            has_probabilities,
            "loaded onnx classifier"
        );
        Ok(Self {
            session: Mutex::new(session),
            input_name,
            has_probabilities,
        })
    }

    fn run(
        &self,
        features: &FeatureVector,
    ) -> Result<(i64, Option<ClassProbabilities>), ClassifierError> {
        let row: Vec<f32> = features.to_array().iter().map(|&v| v as f32).collect();
        let input = Tensor::from_array(([1i64, FEATURE_COUNT as i64], row.into_boxed_slice()))
            .map_err(backend)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Backend("onnx session lock poisoned".into()))?;
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(backend)?;

        let (_, labels) = outputs[0].try_extract_tensor::<i64>().map_err(backend)?;
        let label = *labels
            .first()
            .ok_or_else(|| ClassifierError::Backend("empty label output".into()))?;

        let proba = if self.has_probabilities {
            let (_, values) = outputs[1].try_extract_tensor::<f32>().map_err(backend)?;
            let row: Vec<f64> = values.iter().map(|&p| f64::from(p)).collect();
            Some(ClassProbabilities::from_slice(&row)?)
        } else {
            None
        };

        Ok((label, proba))
    }
}

fn backend(e: ort::Error) -> ClassifierError {
    ClassifierError::Backend(e.to_string())
}

impl Classifier for OnnxClassifier {
    fn kind(&self) -> &'static str {
        "onnx"
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        self.run(features).map(|(label, _)| label)
    }

    fn predict_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        if !self.has_probabilities {
            return Ok(None);
        }
        self.run(features).map(|(_, proba)| proba)
    }

    fn predict_with_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<(i64, Option<ClassProbabilities>), ClassifierError> {
        self.run(features)
    }
}
