//! Evaluate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::EvaluateArgs;
use crate::data::Dataset;
use crate::eval::{ClassificationReport, ConfusionMatrix};
use crate::io::{load_artifact, TrainedModel};

pub fn run_evaluate(args: EvaluateArgs, level: LogLevel) -> Result<(), String> {
    let artifact = load_artifact(&args.model).map_err(|e| format!("Model error: {e}"))?;
    let dataset = Dataset::from_csv(&args.data).map_err(|e| format!("Data error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Evaluating {} on {} rows from {}",
            artifact.metadata.name,
            dataset.len(),
            args.data.display()
        ),
    );

    let x = dataset.feature_matrix();
    let predictions: Vec<usize> = match &artifact.model {
        TrainedModel::DecisionTree(m) => m.predict_batch(&x),
        TrainedModel::RandomForest(m) => m.predict_batch(&x),
    };

    let cm = ConfusionMatrix::from_predictions(&predictions, &dataset.labels);
    let report = ClassificationReport::from_confusion_matrix(&cm);

    log(level, LogLevel::Normal, &format!("{report}"));
    log(level, LogLevel::Verbose, &format!("{cm}"));
    Ok(())
}
