//! Integration tests: train, persist, reload, predict
//!
//! Exercises the full pipeline the CLI drives, without the CLI: a labeled
//! CSV goes in, a trained artifact comes out, and the reloaded artifact
//! answers predictions identically.

use abandonar::config::TrainSpec;
use abandonar::features::FeatureVector;
use abandonar::io::{load_artifact, save_artifact};
use abandonar::pipeline::train_from_spec;
use abandonar::record::CustomerRecord;
use abandonar::risk::RiskBand;
use abandonar::Error;
use std::io::Write;
use std::path::Path;

const HEADER: &str =
    "Tenure,SatisfactionScore,OrderCount,CouponUsed,CashbackAmount,Complain,Churn";

/// Interleaved loyal/at-risk archetypes with mild variation.
fn write_training_csv(rows: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for i in 0..rows {
        if i % 2 == 0 {
            writeln!(file, "{},5,40,2,{},0,0", 48 + (i % 24), 200 + i).unwrap();
        } else {
            writeln!(file, "{},1,1,1,{},1,1", i % 4, i % 10).unwrap();
        }
    }
    file.flush().unwrap();
    file
}

fn spec(data: &Path, output: &Path, algorithm: &str) -> TrainSpec {
    let yaml = format!(
        "model:\n  algorithm: {algorithm}\n  n_estimators: 20\n  max_depth: 6\n  seed: 42\n\
         data:\n  train: {}\n  test_split: 0.25\n\
         output:\n  path: {}\n  name: churn-model\n",
        data.display(),
        output.display()
    );
    serde_yaml::from_str(&yaml).unwrap()
}

fn loyal_record() -> CustomerRecord {
    CustomerRecord::new(60.0, 5.0, 40.0, 2.0, 280.0, false)
}

fn at_risk_record() -> CustomerRecord {
    CustomerRecord::new(1.0, 1.0, 1.0, 1.0, 5.0, true)
}

#[test]
fn test_forest_roundtrip_preserves_predictions() {
    let data = write_training_csv(60);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("churn_model.json");

    let outcome = train_from_spec(&spec(data.path(), &model_path, "forest")).unwrap();
    save_artifact(&outcome.artifact, &model_path).unwrap();
    let reloaded = load_artifact(&model_path).unwrap();

    for record in [loyal_record(), at_risk_record()] {
        let features = FeatureVector::derive(&record);
        assert_eq!(reloaded.predict(&features), outcome.artifact.predict(&features));
    }
}

#[test]
fn test_trained_forest_separates_archetypes() {
    let data = write_training_csv(60);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("churn_model.json");

    let outcome = train_from_spec(&spec(data.path(), &model_path, "forest")).unwrap();

    let loyal = outcome.artifact.predict(&FeatureVector::derive(&loyal_record()));
    assert_eq!(loyal.label, 0);
    assert_eq!(RiskBand::from_probability(loyal.probability), RiskBand::Low);

    let risky = outcome.artifact.predict(&FeatureVector::derive(&at_risk_record()));
    assert_eq!(risky.label, 1);
    assert!(risky.probability > 0.5);
}

#[test]
fn test_tree_roundtrip_through_yaml() {
    let data = write_training_csv(40);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("churn_model.yaml");

    let outcome = train_from_spec(&spec(data.path(), &model_path, "tree")).unwrap();
    save_artifact(&outcome.artifact, &model_path).unwrap();
    let reloaded = load_artifact(&model_path).unwrap();

    assert_eq!(reloaded, outcome.artifact);
    assert_eq!(reloaded.metadata.algorithm, "decision_tree");
}

#[test]
fn test_probability_invariants_hold_after_reload() {
    let data = write_training_csv(60);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("churn_model.json");

    let outcome = train_from_spec(&spec(data.path(), &model_path, "forest")).unwrap();
    save_artifact(&outcome.artifact, &model_path).unwrap();
    let artifact = load_artifact(&model_path).unwrap();

    use abandonar::oracle::ChurnModel;
    for record in [loyal_record(), at_risk_record(), CustomerRecord::default()] {
        let features = FeatureVector::derive(&record);
        let proba = artifact.model.predict_proba(&features);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-9);

        let result = artifact.predict(&features);
        assert_eq!(result.label, usize::from(result.probability > 0.5));
    }
}

#[test]
fn test_tampered_schema_fails_reload() {
    let data = write_training_csv(40);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("churn_model.json");

    let outcome = train_from_spec(&spec(data.path(), &model_path, "tree")).unwrap();
    let mut tampered = outcome.artifact;
    tampered.feature_columns.swap(0, 2);
    save_artifact(&tampered, &model_path).unwrap();

    let err = load_artifact(&model_path).unwrap_err();
    assert!(matches!(err, Error::SchemaMismatch { .. }));
}

#[test]
fn test_training_deterministic_across_runs() {
    let data = write_training_csv(60);
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("m.json");
    let config = spec(data.path(), &model_path, "forest");

    let a = train_from_spec(&config).unwrap();
    let b = train_from_spec(&config).unwrap();
    assert_eq!(a.artifact.model, b.artifact.model);
    assert_eq!(a.report, b.report);
}
