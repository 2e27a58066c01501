//! Random forest: bootstrap ensemble of CART trees

use super::node::{argmax, DecisionTreeClassifier};
use super::train::TreeParams;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A random forest classifier.
///
/// Trees are fit on bootstrap resamples with a random feature subset of
/// size `ceil(sqrt(n_features))` considered at each split. Probabilities
/// are the mean of per-tree leaf distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    trees: Vec<DecisionTreeClassifier>,
    n_features: usize,
    n_classes: usize,
    importances: Vec<f64>,
}

impl RandomForestClassifier {
    /// Fit `n_estimators` trees on bootstrap resamples of `x`/`y`.
    ///
    /// Fully deterministic for a fixed `seed`: each tree draws its bootstrap
    /// sample and split-time feature subsets from an rng seeded off the
    /// forest seed and the tree index.
    ///
    /// # Errors
    ///
    /// Returns `Error::Train` on empty input, zero estimators, or any
    /// underlying tree-fit failure.
    pub fn fit(
        x: &[Vec<f64>],
        y: &[usize],
        n_estimators: usize,
        params: TreeParams,
        seed: u64,
    ) -> Result<Self> {
        if n_estimators == 0 {
            return Err(Error::Train("n_estimators must be >= 1".to_string()));
        }
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
        let n_samples = x.len();
        let max_features = (n_features as f64).sqrt().ceil() as usize;

        let mut trees = Vec::with_capacity(n_estimators);
        for t in 0..n_estimators {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(t as u64));

            let mut boot_x = Vec::with_capacity(n_samples);
            let mut boot_y = Vec::with_capacity(n_samples);
            for _ in 0..n_samples {
                let i = rng.gen_range(0..n_samples);
                boot_x.push(x[i].clone());
                boot_y.push(y[i]);
            }

            let tree = DecisionTreeClassifier::fit_with_feature_sampling(
                &boot_x,
                &boot_y,
                params,
                Some(max_features),
                Some(&mut rng),
            )?;
            trees.push(tree);
        }

        let n_classes = trees.iter().map(DecisionTreeClassifier::n_classes).max().unwrap_or(2);

        // Mean of per-tree normalized importances
        let mut importances = vec![0.0; n_features];
        for tree in &trees {
            for (total, &v) in importances.iter_mut().zip(tree.feature_importances()) {
                *total += v;
            }
        }
        for v in &mut importances {
            *v /= trees.len() as f64;
        }

        Ok(Self {
            trees,
            n_features,
            n_classes,
            importances,
        })
    }

    /// Check the structural invariants of every tree in the ensemble.
    ///
    /// # Errors
    ///
    /// Returns `Error::Train` on an empty ensemble, a structurally invalid
    /// member tree, or a member whose feature arity disagrees with the
    /// forest's.
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(Error::Train("empty forest".to_string()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate()?;
            if tree.n_features() != self.n_features {
                return Err(Error::Train(format!(
                    "tree {t} expects {} features, forest expects {}",
                    tree.n_features(),
                    self.n_features
                )));
            }
        }
        Ok(())
    }

    /// Predicted class for a single sample (argmax of mean probabilities).
    #[must_use]
    pub fn predict_row(&self, features: &[f64]) -> usize {
        argmax(&self.predict_proba_row(features))
    }

    /// Mean class probabilities over all trees.
    #[must_use]
    pub fn predict_proba_row(&self, features: &[f64]) -> Vec<f64> {
        let mut acc = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let dist = tree.predict_proba_row(features);
            for (a, p) in acc.iter_mut().zip(dist.iter()) {
                *a += p;
            }
        }
        for a in &mut acc {
            *a /= self.trees.len() as f64;
        }
        acc
    }

    /// Predicted classes for a batch of samples.
    #[must_use]
    pub fn predict_batch(&self, samples: &[Vec<f64>]) -> Vec<usize> {
        samples.iter().map(|s| self.predict_row(s)).collect()
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
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

    /// Mean normalized feature importances.
    #[must_use]
    pub fn feature_importances(&self) -> &[f64] {
        &self.importances
    }
}
