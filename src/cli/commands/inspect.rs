//! Inspect command implementation
//!
//! Dumps artifact provenance, the persisted feature schema, and the
//! fitted feature importances.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InspectArgs;
use crate::io::{load_artifact, TrainedModel};
use crate::oracle::ChurnModel;
use crate::risk::render_importance_bars;

pub fn run_inspect(args: InspectArgs, level: LogLevel) -> Result<(), String> {
    let artifact = load_artifact(&args.model).map_err(|e| format!("Model error: {e}"))?;
    let meta = &artifact.metadata;

    log(level, LogLevel::Normal, &format!("Artifact: {}", args.model.display()));
    log(level, LogLevel::Normal, &format!("  Name:       {}", meta.name));
    log(level, LogLevel::Normal, &format!("  Algorithm:  {}", meta.algorithm));
    log(
        level,
        LogLevel::Normal,
        &format!("  Created:    {}", meta.created_at.to_rfc3339()),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Trained on: {} rows (abandonar {})", meta.training_rows, meta.produced_by),
    );
    if let Some(seed) = meta.seed {
        log(level, LogLevel::Normal, &format!("  Seed:       {seed}"));
    }
    log(
        level,
        LogLevel::Normal,
        &format!("  Columns:    {}", artifact.feature_columns.join(", ")),
    );

    match &artifact.model {
        TrainedModel::DecisionTree(tree) => {
            log(
                level,
                LogLevel::Verbose,
                &format!("  Nodes: {}, depth: {}", tree.n_nodes(), tree.depth()),
            );
        }
        TrainedModel::RandomForest(forest) => {
            log(
                level,
                LogLevel::Verbose,
                &format!("  Trees: {}", forest.n_trees()),
            );
        }
    }

    let importances = artifact.model.feature_importances();
    log(level, LogLevel::Normal, &render_importance_bars(&importances));
    Ok(())
}
