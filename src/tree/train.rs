//! CART training with Gini impurity

use super::node::{DecisionTreeClassifier, TreeNode};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::index::sample;

/// Decision tree hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    /// Maximum tree depth (root at depth 0).
    pub max_depth: usize,
    /// Minimum samples required to attempt a split.
    pub min_samples_split: usize,
    /// Minimum samples each side of a split must keep.
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 8,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl TreeParams {
    /// Set the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the minimum samples required to split.
    #[must_use]
    pub fn with_min_samples_split(mut self, min: usize) -> Self {
        self.min_samples_split = min.max(2);
        self
    }

    /// Set the minimum samples per leaf.
    #[must_use]
    pub fn with_min_samples_leaf(mut self, min: usize) -> Self {
        self.min_samples_leaf = min.max(1);
        self
    }
}

/// The best split found for a node, if any.
struct Split {
    feature: usize,
    threshold: f64,
    /// Weighted impurity decrease contributed by this split.
    gain: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

struct TreeBuilder<'a> {
    x: &'a [Vec<f64>],
    y: &'a [usize],
    n_classes: usize,
    n_total: usize,
    params: TreeParams,
    nodes: Vec<TreeNode>,
    importances: Vec<f64>,
}

impl DecisionTreeClassifier {
    /// Fit a tree on `x` (rows of feature values) and labels `y`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Train` on empty input, length mismatch, or ragged
    /// feature rows.
    pub fn fit(x: &[Vec<f64>], y: &[usize], params: TreeParams) -> Result<Self> {
        Self::fit_with_feature_sampling(x, y, params, None, None)
    }

    /// Fit with optional per-split feature subsampling (forest path).
    ///
    /// When `max_features` is `Some(k)`, each split considers a random
    /// subset of `k` features drawn from `rng`.
    pub(crate) fn fit_with_feature_sampling(
        x: &[Vec<f64>],
        y: &[usize],
        params: TreeParams,
        max_features: Option<usize>,
        mut rng: Option<&mut StdRng>,
    ) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::Train("no training samples".to_string()));
        }
        if x.len() != y.len() {
            return Err(Error::Train(format!(
                "{} samples but {} labels",
                x.len(),
                y.len()
            )));
        }
        let n_features = x[0].len();
        if n_features == 0 {
            return Err(Error::Train("samples carry no features".to_string()));
        }
        if x.iter().any(|row| row.len() != n_features) {
            return Err(Error::Train("ragged feature rows".to_string()));
        }
        let n_classes = y.iter().max().map_or(0, |&m| m + 1).max(2);

        let mut builder = TreeBuilder {
            x,
            y,
            n_classes,
            n_total: x.len(),
            params,
            nodes: Vec::new(),
            importances: vec![0.0; n_features],
        };
        let all: Vec<usize> = (0..x.len()).collect();
        builder.build(&all, 0, max_features, &mut rng);

        let mut importances = builder.importances;
        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for v in &mut importances {
                *v /= total;
            }
        }

        let mut tree = Self::from_nodes(builder.nodes, n_features, n_classes)?;
        tree.importances = importances;
        Ok(tree)
    }
}

impl TreeBuilder<'_> {
    /// Recursively grow the subtree for `indices`, returning its node index.
    fn build(
        &mut self,
        indices: &[usize],
        depth: usize,
        max_features: Option<usize>,
        rng: &mut Option<&mut StdRng>,
    ) -> usize {
        let counts = self.class_counts(indices);

        let should_split = depth < self.params.max_depth
            && indices.len() >= self.params.min_samples_split
            && !is_pure(&counts);

        let split = if should_split {
            self.best_split(indices, &counts, max_features, rng)
        } else {
            None
        };

        match split {
            Some(split) => {
                self.importances[split.feature] += split.gain;

                // Reserve this node's slot before recursing so children land
                // after their parent.
                let idx = self.nodes.len();
                self.nodes.push(TreeNode::leaf(counts));

                let left = self.build(&split.left, depth + 1, max_features, rng);
                let right = self.build(&split.right, depth + 1, max_features, rng);

                let node = &mut self.nodes[idx];
                node.feature = split.feature as i32;
                node.threshold = split.threshold;
                node.left = left as i32;
                node.right = right as i32;
                idx
            }
            None => {
                let idx = self.nodes.len();
                self.nodes.push(TreeNode::leaf(counts));
                idx
            }
        }
    }

    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &i in indices {
            counts[self.y[i]] += 1;
        }
        counts
    }

    /// Exhaustive midpoint split search over the candidate features.
    fn best_split(
        &self,
        indices: &[usize],
        parent_counts: &[usize],
        max_features: Option<usize>,
        rng: &mut Option<&mut StdRng>,
    ) -> Option<Split> {
        let n = indices.len() as f64;
        let parent_impurity = gini(parent_counts);

        let n_features = self.x[0].len();
        let candidates: Vec<usize> = match (max_features, rng.as_mut()) {
            (Some(k), Some(rng)) if k < n_features => {
                sample(*rng, n_features, k).into_iter().collect()
            }
            _ => (0..n_features).collect(),
        };

        let mut best: Option<(usize, f64, f64)> = None; // (feature, threshold, gain)

        for &feature in &candidates {
            let mut order: Vec<usize> = indices.to_vec();
            order.sort_by(|&a, &b| {
                self.x[a][feature]
                    .partial_cmp(&self.x[b][feature])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut left_counts = vec![0usize; self.n_classes];
            let mut right_counts = parent_counts.to_vec();

            for (pos, window) in order.windows(2).enumerate() {
                let (lo, hi) = (window[0], window[1]);
                left_counts[self.y[lo]] += 1;
                right_counts[self.y[lo]] -= 1;

                let lo_val = self.x[lo][feature];
                let hi_val = self.x[hi][feature];
                if lo_val == hi_val {
                    continue;
                }

                let n_left = pos + 1;
                let n_right = indices.len() - n_left;
                if n_left < self.params.min_samples_leaf
                    || n_right < self.params.min_samples_leaf
                {
                    continue;
                }

                let weighted = (n_left as f64 / n) * gini(&left_counts)
                    + (n_right as f64 / n) * gini(&right_counts);
                // Zero-decrease splits stay admissible: an XOR-shaped node
                // needs one uninformative cut before the informative ones.
                let decrease = parent_impurity - weighted;
                if decrease < 0.0 {
                    continue;
                }

                // Weight the gain by the node's share of the training set
                // (sklearn's impurity-decrease importance).
                let gain = (n / self.n_total as f64) * decrease;
                let threshold = (lo_val + hi_val) / 2.0;

                if best.map_or(true, |(_, _, g)| gain > g) {
                    best = Some((feature, threshold, gain));
                }
            }
        }

        best.map(|(feature, threshold, gain)| {
            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| self.x[i][feature] <= threshold);
            Split {
                feature,
                threshold,
                gain,
                left,
                right,
            }
        })
    }
}

/// Gini impurity of a class-count vector.
fn gini(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn is_pure(counts: &[usize]) -> bool {
    counts.iter().filter(|&&c| c > 0).count() <= 1
}
