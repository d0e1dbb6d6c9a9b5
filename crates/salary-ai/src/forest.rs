//! Decision-forest classifier.
//!
//! Trees are stored as flat node arrays. Split nodes send `x[feature] <=
//! threshold` left, everything else right. Leaves hold per-class weights
//! (sample counts or fractions), normalized at prediction time. The forest's
//! distribution is the mean of its trees' distributions.

use salary_core::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

use crate::classifier::{ClassProbabilities, Classifier, ClassifierError};
use crate::model::InvalidModel;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForestModel {
    #[serde(default)]
    pub n_features: Option<usize>,
    pub trees: Vec<Tree>,
}

impl ForestModel {
    /// Structural checks that make traversal total: every split reads a real
    /// feature, every child index points forward, every leaf has two
    /// non-negative weights with a positive sum.
    pub fn validate(&self) -> Result<(), InvalidModel> {
        if let Some(n) = self.n_features
            && n != FEATURE_COUNT
        {
            return Err(InvalidModel(format!(
                "model expects {n} features, form provides {FEATURE_COUNT}"
            )));
        }
        if self.trees.is_empty() {
            return Err(InvalidModel("forest has no trees".into()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(InvalidModel(format!("tree {t} has no nodes")));
            }
            let len = tree.nodes.len();
            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(InvalidModel(format!(
                                "tree {t} node {i}: feature index {feature} out of range"
                            )));
                        }
                        if !threshold.is_finite() {
                            return Err(InvalidModel(format!(
                                "tree {t} node {i}: non-finite threshold"
                            )));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= len {
                                return Err(InvalidModel(format!(
                                    "tree {t} node {i}: child {child} must point forward within {len} nodes"
                                )));
                            }
                        }
                    }
                    Node::Leaf { value } => {
                        if value.len() != 2 {
                            return Err(InvalidModel(format!(
                                "tree {t} node {i}: leaf has {} class weights, expected 2",
                                value.len()
                            )));
                        }
                        if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                            return Err(InvalidModel(format!(
                                "tree {t} node {i}: invalid leaf weights {value:?}"
                            )));
                        }
                        let total = value.iter().sum::<f64>();
                        if total <= 0.0 || !total.is_finite() {
                            return Err(InvalidModel(format!(
                                "tree {t} node {i}: leaf weights sum to {total}"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn distribution(&self, row: &[f64; FEATURE_COUNT]) -> [f64; 2] {
        let mut acc = [0.0f64; 2];
        for tree in &self.trees {
            let leaf = tree.leaf(row);
            let total = leaf[0] + leaf[1];
            acc[0] += leaf[0] / total;
            acc[1] += leaf[1] / total;
        }
        let n = self.trees.len() as f64;
        [acc[0] / n, acc[1] / n]
    }
}

/// Ties go to class 0.
fn argmax(p: &[f64; 2]) -> i64 {
    if p[1] > p[0] { 1 } else { 0 }
}

impl Tree {
    /// Walk from the root to a leaf. Relies on [`ForestModel::validate`].
    fn leaf(&self, row: &[f64; FEATURE_COUNT]) -> &[f64] {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return value,
            }
        }
    }
}

impl Classifier for ForestModel {
    fn kind(&self) -> &'static str {
        "forest"
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        Ok(argmax(&self.distribution(&features.to_array())))
    }

    fn predict_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        ClassProbabilities::try_new(self.distribution(&features.to_array())).map(Some)
    }

    fn predict_with_proba(
        &self,
        features: &FeatureVector,
    ) -> Result<(i64, Option<ClassProbabilities>), ClassifierError> {
        let p = self.distribution(&features.to_array());
        Ok((argmax(&p), Some(ClassProbabilities::try_new(p)?)))
    }
}
