//! Inference layer: persisted encoders and classifier, and the adapter that joins them.

pub mod adapter;
pub mod artifacts;
pub mod classifier;
pub mod encoder;
mod error;
pub mod forest;
pub mod linear;
pub mod model;
#[cfg(feature = "onnx")]
mod onnx;

pub use adapter::InferenceAdapter;
pub use artifacts::{Artifacts, Encoders};
pub use classifier::{ClassProbabilities, Classifier, ClassifierError};
pub use encoder::{CategoricalEncoder, UnknownCategory};
pub use error::{ArtifactError, PredictError};
pub use model::{ForestModel, InvalidModel, LinearModel, ModelDocument};
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
