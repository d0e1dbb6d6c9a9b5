//! Label encoders for the categorical form fields.
//!
//! Each encoder is the class list fitted at training time. A label's code is
//! its position in that list, so the list order is part of the model contract.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// A label that is not in the encoder's class set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} category: {label:?}")]
pub struct UnknownCategory {
    pub field: String,
    pub label: String,
}

/// A class list that cannot be an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEncoder {
    #[error("encoder has no classes")]
    Empty,
    #[error("duplicate class {0:?}")]
    Duplicate(String),
}

/// Persisted form of an encoder: `{"classes": [...]}`.
#[derive(Debug, Deserialize)]
pub struct EncoderDocument {
    pub classes: Vec<String>,
}

/// Injective mapping from known class labels to codes `0..k-1`.
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    field: String,
    classes: Vec<String>,
    codes: HashMap<String, usize>,
}

impl CategoricalEncoder {
    /// Build an encoder for `field` from its ordered class list.
    pub fn new(field: &str, classes: Vec<String>) -> Result<Self, InvalidEncoder> {
        if classes.is_empty() {
            return Err(InvalidEncoder::Empty);
        }

        let mut codes = HashMap::with_capacity(classes.len());
        for (code, label) in classes.iter().enumerate() {
            if codes.insert(label.clone(), code).is_some() {
                return Err(InvalidEncoder::Duplicate(label.clone()));
            }
        }

        Ok(Self {
            field: field.to_string(),
            classes,
            codes,
        })
    }

    /// Form field this encoder belongs to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Known classes in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.codes.contains_key(label)
    }

    /// Exact lookup. No trimming or case folding.
    pub fn encode(&self, label: &str) -> Result<usize, UnknownCategory> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| UnknownCategory {
                field: self.field.clone(),
                label: label.to_string(),
            })
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}
