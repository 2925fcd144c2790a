//! Serialized model artifact format.
//!
//! The artifact is a self-describing JSON document: a semantic version,
//! the output class labels, ordered label lists for the categorical
//! features (a label's code is its position), and a forest of decision
//! trees stored as flat node arrays.

use serde::{Deserialize, Serialize};

/// Number of columns in the trained feature row.
pub const FEATURE_COUNT: usize = 6;

/// On-disk premium model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Semantic version of the trained model.
    pub version: String,
    /// Output class labels; tree leaves index into this list.
    pub classes: Vec<String>,
    /// Categorical feature encoders.
    pub encoders: Encoders,
    /// Decision tree ensemble.
    pub trees: Vec<Tree>,
}

/// Ordered label lists for the categorical features.
///
/// A label's numeric code is its position in the list, matching the
/// encoding the model was trained with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encoders {
    /// Age group labels.
    pub age_group: Vec<String>,
    /// Lifestyle risk labels.
    pub lifestyle_risk: Vec<String>,
    /// Occupation labels.
    pub occupation: Vec<String>,
}

/// A single decision tree with nodes in a flat array; node 0 is the
/// root and children always point forward in the array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Tree nodes.
    pub nodes: Vec<Node>,
}

/// One node of a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Internal split: rows with `row[feature] <= threshold` descend to
    /// `left`, the rest to `right`.
    Split {
        /// Feature column index.
        feature: usize,
        /// Split threshold.
        threshold: f64,
        /// Index of the left child node.
        left: usize,
        /// Index of the right child node.
        right: usize,
    },
    /// Terminal node voting for a class.
    Leaf {
        /// Index into the artifact's class list.
        class: usize,
    },
}

impl Tree {
    /// Walks the tree for one feature row and returns the leaf's class
    /// index. Assumes the tree passed [`Artifact::validate`], which
    /// guarantees in-range, forward-pointing indices.
    pub(crate) fn decide(&self, row: &[f64; FEATURE_COUNT]) -> usize {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { class } => return *class,
            }
        }
    }
}

impl Artifact {
    /// Checks the structural invariants the tree walker relies on.
    ///
    /// # Errors
    ///
    /// Returns a description of the first structural defect found:
    /// empty class list, empty forest, empty tree, out-of-range
    /// feature/class indices, non-finite thresholds, or child indices
    /// that are out of range or do not point forward.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("class list is empty".to_string());
        }
        if self.trees.is_empty() {
            return Err("tree ensemble is empty".to_string());
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {t} has no nodes"));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(format!(
                                "tree {t} node {n}: feature index {feature} out of range"
                            ));
                        }
                        if !threshold.is_finite() {
                            return Err(format!("tree {t} node {n}: non-finite threshold"));
                        }
                        for child in [*left, *right] {
                            if child <= n || child >= tree.nodes.len() {
                                return Err(format!(
                                    "tree {t} node {n}: child index {child} out of range"
                                ));
                            }
                        }
                    }
                    Node::Leaf { class } => {
                        if *class >= self.classes.len() {
                            return Err(format!(
                                "tree {t} node {n}: class index {class} out of range"
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
