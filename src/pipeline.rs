//! End-to-end training pipeline
//!
//! Wires the data, feature, tree, and eval layers together: load the
//! labeled CSV, hold out a test slice, derive features through the serving
//! code path, fit the configured classifier, and evaluate on the held-out
//! rows. The artifact is not written here; the caller decides where.

use crate::config::{Algorithm, TrainSpec};
use crate::data::Dataset;
use crate::error::Result;
use crate::eval::ClassificationReport;
use crate::io::{ArtifactMetadata, ModelArtifact, TrainedModel};
use crate::tree::{DecisionTreeClassifier, RandomForestClassifier, TreeParams};

/// Everything the train command needs to report and persist.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// The trained model, bundled under the serving schema.
    pub artifact: ModelArtifact,
    /// Held-out evaluation.
    pub report: ClassificationReport,
    /// Rows used for fitting.
    pub train_rows: usize,
    /// Rows held out for evaluation.
    pub test_rows: usize,
}

/// Train a classifier per the spec and evaluate it on a held-out slice.
///
/// # Errors
///
/// Propagates data-loading, splitting, and fitting errors.
pub fn train_from_spec(spec: &TrainSpec) -> Result<TrainingOutcome> {
    let dataset = Dataset::from_csv(&spec.data.train)?;
    let (train, test) = dataset.train_test_split(spec.data.test_split, spec.model.seed)?;

    let x_train = train.feature_matrix();
    let params = TreeParams::default()
        .with_max_depth(spec.model.max_depth)
        .with_min_samples_split(spec.model.min_samples_split)
        .with_min_samples_leaf(spec.model.min_samples_leaf);

    let model = match spec.model.algorithm {
        Algorithm::Tree => TrainedModel::DecisionTree(DecisionTreeClassifier::fit(
            &x_train,
            &train.labels,
            params,
        )?),
        Algorithm::Forest => TrainedModel::RandomForest(RandomForestClassifier::fit(
            &x_train,
            &train.labels,
            spec.model.n_estimators,
            params,
            spec.model.seed,
        )?),
    };

    let x_test = test.feature_matrix();
    let predictions: Vec<usize> = match &model {
        TrainedModel::DecisionTree(m) => m.predict_batch(&x_test),
        TrainedModel::RandomForest(m) => m.predict_batch(&x_test),
    };
    let report = ClassificationReport::from_predictions(&predictions, &test.labels);

    let metadata = ArtifactMetadata::new(&spec.output.name, model.algorithm(), train.len())
        .with_seed(spec.model.seed);

    Ok(TrainingOutcome {
        artifact: ModelArtifact::new(metadata, model),
        report,
        train_rows: train.len(),
        test_rows: test.len(),
    })
}
