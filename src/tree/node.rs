//! Array-based decision tree representation and traversal

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sentinel feature index marking a leaf node.
pub(crate) const LEAF: i32 = -2;

/// A node in the decision tree.
///
/// Internal nodes split on `feature <= threshold` (left on true); leaves
/// carry the class counts observed at fit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index to split on (`-2` for leaves).
    pub feature: i32,
    /// Split threshold (features <= threshold go left).
    pub threshold: f64,
    /// Index of left child (`-1` for leaves).
    pub left: i32,
    /// Index of right child (`-1` for leaves).
    pub right: i32,
    /// Training-sample count per class at this node.
    pub class_counts: Vec<usize>,
}

impl TreeNode {
    /// Returns `true` if this node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.feature == LEAF
    }

    pub(crate) fn leaf(class_counts: Vec<usize>) -> Self {
        Self {
            feature: LEAF,
            threshold: 0.0,
            left: -1,
            right: -1,
            class_counts,
        }
    }

    /// Class distribution at this node, normalized to sum 1.
    #[must_use]
    pub fn distribution(&self) -> Vec<f64> {
        let total: usize = self.class_counts.iter().sum();
        if total == 0 {
            let n = self.class_counts.len().max(1);
            return vec![1.0 / n as f64; n];
        }
        self.class_counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }
}

/// A trained CART decision tree classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) n_features: usize,
    pub(crate) n_classes: usize,
    pub(crate) importances: Vec<f64>,
}

impl DecisionTreeClassifier {
    /// Rebuild a tree from its node array.
    ///
    /// # Errors
    ///
    /// Returns `Error::Train` if the node array is empty, a child index is
    /// out of range, or a node's class-count arity disagrees with
    /// `n_classes`.
    pub fn from_nodes(nodes: Vec<TreeNode>, n_features: usize, n_classes: usize) -> Result<Self> {
        let importances = vec![0.0; n_features];
        let tree = Self {
            nodes,
            n_features,
            n_classes,
            importances,
        };
        tree.validate()?;
        Ok(tree)
    }

    /// Check the structural invariants of the node array.
    ///
    /// Deserialization bypasses `from_nodes`, so loaded trees must run
    /// through this before answering predictions.
    ///
    /// # Errors
    ///
    /// Returns `Error::Train` naming the first violated invariant: an empty
    /// node array, a split on an out-of-range feature, a child pointer that
    /// is out of range or does not come after its parent (traversal must
    /// terminate), a class-count arity mismatch, or a wrong-length
    /// importances vector.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::Train("empty tree".to_string()));
        }
        if self.importances.len() != self.n_features {
            return Err(Error::Train(format!(
                "{} importances for {} features",
                self.importances.len(),
                self.n_features
            )));
        }
        let n = self.nodes.len() as i32;
        for (i, node) in self.nodes.iter().enumerate() {
            if node.class_counts.len() != self.n_classes {
                return Err(Error::Train(format!(
                    "node {i} carries {} class counts, expected {}",
                    node.class_counts.len(),
                    self.n_classes
                )));
            }
            if !node.is_leaf() {
                if node.feature < 0 || node.feature as usize >= self.n_features {
                    return Err(Error::Train(format!(
                        "node {i} splits on feature {} of {}",
                        node.feature, self.n_features
                    )));
                }
                // Children always land after their parent in the array;
                // anything else cannot come from training and may cycle.
                let parent = i as i32;
                if node.left <= parent || node.left >= n || node.right <= parent || node.right >= n
                {
                    return Err(Error::Train(format!("node {i} has broken child pointers")));
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to the leaf matching `features`.
    fn leaf_for(&self, features: &[f64]) -> &TreeNode {
        let mut idx = 0usize;
        loop {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                return node;
            }
            let value = features.get(node.feature as usize).copied().unwrap_or(0.0);
            idx = if value <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }
    }

    /// Predicted class for a single sample.
    #[must_use]
    pub fn predict_row(&self, features: &[f64]) -> usize {
        let dist = self.leaf_for(features).distribution();
        argmax(&dist)
    }

    /// Class probabilities for a single sample (leaf distribution).
    #[must_use]
    pub fn predict_proba_row(&self, features: &[f64]) -> Vec<f64> {
        self.leaf_for(features).distribution()
    }

    /// Predicted classes for a batch of samples.
    #[must_use]
    pub fn predict_batch(&self, samples: &[Vec<f64>]) -> Vec<usize> {
        samples.iter().map(|s| self.predict_row(s)).collect()
    }

    /// Number of nodes, leaves included.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Expected feature count per sample.
    #[must_use]
    pub const fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of output classes.
    #[must_use]
    pub const fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Normalized impurity-decrease feature importances.
    #[must_use]
    pub fn feature_importances(&self) -> &[f64] {
        &self.importances
    }

    /// Tree depth (root-only tree has depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, idx: usize) -> usize {
        let node = &self.nodes[idx];
        if node.is_leaf() {
            0
        } else {
            1 + self
                .depth_from(node.left as usize)
                .max(self.depth_from(node.right as usize))
        }
    }
}

/// Index of the largest value; ties resolve to the lowest index.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
