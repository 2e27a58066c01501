//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, Algorithm, InfoArgs};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Configuration: {}", args.config.display()),
    );
    let algorithm = match spec.model.algorithm {
        Algorithm::Tree => "decision tree",
        Algorithm::Forest => "random forest",
    };
    log(level, LogLevel::Normal, &format!("  Algorithm:   {algorithm}"));
    if spec.model.algorithm == Algorithm::Forest {
        log(
            level,
            LogLevel::Normal,
            &format!("  Estimators:  {}", spec.model.n_estimators),
        );
    }
    log(
        level,
        LogLevel::Normal,
        &format!("  Max depth:   {}", spec.model.max_depth),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Seed:        {}", spec.model.seed),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Data:        {}", spec.data.train.display()),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Test split:  {}", spec.data.test_split),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Output:      {}", spec.output.path.display()),
    );
    Ok(())
}
