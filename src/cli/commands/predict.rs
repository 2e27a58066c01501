//! Predict command implementation
//!
//! Scores one customer: assemble the record from flags, derive features,
//! invoke the loaded oracle, and render the risk panel.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, PredictArgs};
use crate::features::FeatureVector;
use crate::io::load_artifact;
use crate::record::CustomerRecord;
use crate::risk::{render_report, RiskBand};

pub fn run_predict(args: PredictArgs, level: LogLevel) -> Result<(), String> {
    let artifact = load_artifact(&args.model).map_err(|e| format!("Model error: {e}"))?;

    let record = CustomerRecord::new(
        args.tenure,
        args.satisfaction,
        args.orders,
        args.coupons,
        args.cashback,
        args.complain,
    );
    let features = FeatureVector::derive(&record);
    if features == FeatureVector::NEUTRAL {
        log(
            level,
            LogLevel::Verbose,
            "Feature derivation degraded to the neutral vector",
        );
    }

    let result = artifact.predict(&features);

    match args.format {
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "Features: {:.4}, {:.4}, {:.4}",
                    features.feature1, features.feature2, features.feature3
                ),
            );
            log(level, LogLevel::Normal, &render_report(&result));
        }
        OutputFormat::Json => {
            let band = RiskBand::from_probability(result.probability);
            let payload = serde_json::json!({
                "label": result.label,
                "probability": result.probability,
                "risk_band": band,
                "features": features,
            });
            let rendered = serde_json::to_string_pretty(&payload)
                .map_err(|e| format!("Output error: {e}"))?;
            log(level, LogLevel::Normal, &rendered);
        }
    }
    Ok(())
}
