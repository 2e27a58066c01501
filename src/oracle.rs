//! The model oracle: the capability surface the presenter consumes
//!
//! Classifiers are opaque behind `ChurnModel`: a feature vector goes in,
//! a label and a class distribution come out. Nothing downstream of this
//! trait knows whether a single tree or a forest answered.

use crate::features::FeatureVector;
use crate::tree::{DecisionTreeClassifier, RandomForestClassifier};
use serde::{Deserialize, Serialize};

/// Churn class index in the binary label space.
pub const CHURN_CLASS: usize = 1;

/// Outcome of one oracle invocation.
///
/// Invariants: `probability` is the churn-class probability in [0, 1];
/// `label == 1` iff `probability > 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: 1 = churn, 0 = stay.
    pub label: usize,
    /// Probability of the churn class.
    pub probability: f64,
}

impl PredictionResult {
    /// Build a result from a churn probability, deriving the label from the
    /// 0.5 threshold.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        Self {
            label: usize::from(probability > 0.5),
            probability,
        }
    }
}

/// A trained classifier consumed for inference.
pub trait ChurnModel {
    /// Predicted class for the feature vector.
    fn predict(&self, features: &FeatureVector) -> usize;

    /// Two-class probability distribution `[p_stay, p_churn]`; sums to 1.
    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2];

    /// Normalized per-feature importances, `FEATURE_COLUMNS` order.
    fn feature_importances(&self) -> Vec<f64>;

    /// Full prediction result for the feature vector.
    fn predict_result(&self, features: &FeatureVector) -> PredictionResult {
        PredictionResult::from_probability(self.predict_proba(features)[CHURN_CLASS])
    }
}

/// Pad or truncate an n-class distribution into the binary pair.
fn binary_proba(dist: &[f64]) -> [f64; 2] {
    let p0 = dist.first().copied().unwrap_or(0.0);
    let p1 = dist.get(1).copied().unwrap_or(0.0);
    let total = p0 + p1;
    if total > 0.0 {
        [p0 / total, p1 / total]
    } else {
        [0.5, 0.5]
    }
}

impl ChurnModel for DecisionTreeClassifier {
    fn predict(&self, features: &FeatureVector) -> usize {
        self.predict_row(&features.as_array())
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        binary_proba(&self.predict_proba_row(&features.as_array()))
    }

    fn feature_importances(&self) -> Vec<f64> {
        DecisionTreeClassifier::feature_importances(self).to_vec()
    }
}

impl ChurnModel for RandomForestClassifier {
    fn predict(&self, features: &FeatureVector) -> usize {
        self.predict_row(&features.as_array())
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        binary_proba(&self.predict_proba_row(&features.as_array()))
    }

    fn feature_importances(&self) -> Vec<f64> {
        RandomForestClassifier::feature_importances(self).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CustomerRecord;
    use crate::tree::TreeParams;

    fn training_rows() -> (Vec<Vec<f64>>, Vec<usize>) {
        // Low-risk and high-risk archetypes mapped through the deriver
        let stay = CustomerRecord::new(60.0, 5.0, 40.0, 2.0, 280.0, false);
        let churn = CustomerRecord::new(1.0, 1.0, 0.0, 0.0, 0.0, true);
        let mut x = Vec::new();
        let mut y = Vec::new();
        for _ in 0..10 {
            x.push(FeatureVector::derive(&stay).as_array().to_vec());
            y.push(0);
            x.push(FeatureVector::derive(&churn).as_array().to_vec());
            y.push(1);
        }
        (x, y)
    }

    #[test]
    fn test_prediction_result_threshold() {
        assert_eq!(PredictionResult::from_probability(0.5).label, 0);
        assert_eq!(PredictionResult::from_probability(0.500001).label, 1);
        assert_eq!(PredictionResult::from_probability(0.0).label, 0);
        assert_eq!(PredictionResult::from_probability(1.0).label, 1);
    }

    #[test]
    fn test_prediction_result_clamps_probability() {
        assert_eq!(PredictionResult::from_probability(1.7).probability, 1.0);
        assert_eq!(PredictionResult::from_probability(-0.3).probability, 0.0);
    }

    #[test]
    fn test_oracle_proba_sums_to_one_and_label_consistent() {
        let (x, y) = training_rows();
        let tree = DecisionTreeClassifier::fit(&x, &y, TreeParams::default()).unwrap();

        let risky = FeatureVector::derive(&CustomerRecord::new(1.0, 1.0, 0.0, 0.0, 0.0, true));
        let proba = tree.predict_proba(&risky);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-9);

        let result = tree.predict_result(&risky);
        assert_eq!(result.label, usize::from(result.probability > 0.5));
        assert_eq!(result.label, CHURN_CLASS);
    }

    #[test]
    fn test_tree_and_forest_agree_on_archetypes() {
        let (x, y) = training_rows();
        let tree = DecisionTreeClassifier::fit(&x, &y, TreeParams::default()).unwrap();
        let forest = RandomForestClassifier::fit(&x, &y, 15, TreeParams::default(), 42).unwrap();

        let loyal = FeatureVector::derive(&CustomerRecord::new(60.0, 5.0, 40.0, 2.0, 280.0, false));
        assert_eq!(ChurnModel::predict(&tree, &loyal), 0);
        assert_eq!(ChurnModel::predict(&forest, &loyal), 0);
    }
}
