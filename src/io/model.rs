//! Artifact structure for serialization

use crate::error::Result;
use crate::features::{FeatureVector, FEATURE_COLUMNS};
use crate::oracle::{ChurnModel, PredictionResult};
use crate::tree::{DecisionTreeClassifier, RandomForestClassifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artifact metadata: provenance of the trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Model name/identifier
    pub name: String,

    /// Algorithm identifier ("decision_tree" or "random_forest")
    pub algorithm: String,

    /// Crate version that produced the artifact
    pub produced_by: String,

    /// Creation timestamp, RFC3339
    pub created_at: DateTime<Utc>,

    /// Number of rows the model was trained on
    pub training_rows: usize,

    /// Seed used for training, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ArtifactMetadata {
    /// Create metadata stamped with the current time and crate version.
    pub fn new(
        name: impl Into<String>,
        algorithm: impl Into<String>,
        training_rows: usize,
    ) -> Self {
        Self {
            name: name.into(),
            algorithm: algorithm.into(),
            produced_by: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            training_rows,
            seed: None,
        }
    }

    /// Record the training seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The trained classifier inside an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainedModel {
    DecisionTree(DecisionTreeClassifier),
    RandomForest(RandomForestClassifier),
}

impl TrainedModel {
    /// Algorithm identifier used in metadata.
    #[must_use]
    pub const fn algorithm(&self) -> &'static str {
        match self {
            Self::DecisionTree(_) => "decision_tree",
            Self::RandomForest(_) => "random_forest",
        }
    }

    /// Check the structural invariants of the contained classifier.
    ///
    /// # Errors
    ///
    /// Propagates the classifier's `Error::Train` on a broken node array.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::DecisionTree(m) => m.validate(),
            Self::RandomForest(m) => m.validate(),
        }
    }
}

impl ChurnModel for TrainedModel {
    fn predict(&self, features: &FeatureVector) -> usize {
        match self {
            Self::DecisionTree(m) => m.predict(features),
            Self::RandomForest(m) => m.predict(features),
        }
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        match self {
            Self::DecisionTree(m) => m.predict_proba(features),
            Self::RandomForest(m) => m.predict_proba(features),
        }
    }

    fn feature_importances(&self) -> Vec<f64> {
        match self {
            Self::DecisionTree(m) => ChurnModel::feature_importances(m),
            Self::RandomForest(m) => ChurnModel::feature_importances(m),
        }
    }
}

/// A complete persisted model: classifier, feature schema, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Provenance metadata
    pub metadata: ArtifactMetadata,

    /// Ordered feature column names the model was fit on
    pub feature_columns: Vec<String>,

    /// The trained classifier
    pub model: TrainedModel,
}

impl ModelArtifact {
    /// Bundle a trained model under the crate's serving schema.
    pub fn new(metadata: ArtifactMetadata, model: TrainedModel) -> Self {
        Self {
            metadata,
            feature_columns: FEATURE_COLUMNS.iter().map(ToString::to_string).collect(),
            model,
        }
    }

    /// True when the artifact's schema matches the serving schema in names,
    /// order, and arity.
    #[must_use]
    pub fn schema_matches(&self) -> bool {
        self.feature_columns.len() == FEATURE_COLUMNS.len()
            && self
                .feature_columns
                .iter()
                .zip(FEATURE_COLUMNS.iter())
                .all(|(a, b)| a == b)
    }

    /// Run one prediction through the bundled model.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> PredictionResult {
        self.model.predict_result(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeParams;

    fn small_tree() -> TrainedModel {
        let x = vec![vec![0.1, 0.1, 0.1], vec![0.9, 0.9, 0.9]];
        let y = vec![0, 1];
        TrainedModel::DecisionTree(
            DecisionTreeClassifier::fit(&x, &y, TreeParams::default()).unwrap(),
        )
    }

    #[test]
    fn test_artifact_carries_serving_schema() {
        let artifact =
            ModelArtifact::new(ArtifactMetadata::new("m", "decision_tree", 2), small_tree());
        assert_eq!(
            artifact.feature_columns,
            vec!["Feature1", "Feature2", "Feature3"]
        );
        assert!(artifact.schema_matches());
    }

    #[test]
    fn test_schema_mismatch_detected() {
        let mut artifact =
            ModelArtifact::new(ArtifactMetadata::new("m", "decision_tree", 2), small_tree());
        artifact.feature_columns = vec!["Feature2".to_string(), "Feature1".to_string()];
        assert!(!artifact.schema_matches());

        artifact.feature_columns = vec![
            "Feature1".to_string(),
            "Feature2".to_string(),
            "F3".to_string(),
        ];
        assert!(!artifact.schema_matches());
    }

    #[test]
    fn test_metadata_records_crate_version() {
        let meta = ArtifactMetadata::new("churn-model", "random_forest", 100).with_seed(42);
        assert_eq!(meta.produced_by, env!("CARGO_PKG_VERSION"));
        assert_eq!(meta.seed, Some(42));
    }
}
