//! Train command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, TrainArgs};
use crate::io::save_artifact;
use crate::pipeline::train_from_spec;

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Abandonar: training from {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);

    if args.dry_run {
        log(
            level,
            LogLevel::Normal,
            "Dry run - config validated successfully",
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Algorithm: {:?}", spec.model.algorithm),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Data: {}", spec.data.train.display()),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Output: {}", spec.output.path.display()),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Seed: {}", spec.model.seed),
        );
        return Ok(());
    }

    let outcome = train_from_spec(&spec).map_err(|e| format!("Training error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Trained {} on {} rows ({} held out)",
            outcome.artifact.metadata.algorithm, outcome.train_rows, outcome.test_rows
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("Held-out accuracy: {:.3}", outcome.report.accuracy()),
    );
    log(level, LogLevel::Verbose, &format!("{}", outcome.report));

    save_artifact(&outcome.artifact, &spec.output.path)
        .map_err(|e| format!("Save error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Model saved to {}", spec.output.path.display()),
    );
    Ok(())
}
