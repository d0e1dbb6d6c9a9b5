//! Core types shared by the salary predictor: form input, the fixed feature order, and results.

pub mod features;
pub mod input;
pub mod prediction;
pub mod schema;

pub use features::{FEATURE_COUNT, FEATURE_ORDER, Feature, FeatureVector};
pub use input::EmployeeInput;
pub use prediction::{IncomeCategory, InvalidLabel, PredictionResult};
pub use schema::feature_schema;
