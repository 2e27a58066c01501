//! CLI argument definitions
//!
//! Lives next to the config schema so `apply_overrides` and the YAML spec
//! evolve together.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Abandonar: churn prediction pipeline
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "abandonar")]
#[command(version)]
#[command(about = "Churn prediction: train tree/forest classifiers, score customers, band risk")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Train a model from a YAML configuration
    Train(TrainArgs),

    /// Score a single customer against a saved model
    Predict(PredictArgs),

    /// Evaluate a saved model on a labeled CSV
    Evaluate(EvaluateArgs),

    /// Validate a configuration file without training
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),

    /// Inspect a saved model artifact
    Inspect(InspectArgs),
}

/// Arguments for the train command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// YAML configuration path
    pub config: PathBuf,

    /// Override the number of trees
    #[arg(long)]
    pub n_estimators: Option<usize>,

    /// Override the maximum depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Override the training seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the artifact output path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Validate the config and print the plan without training
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the predict command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Saved model artifact path
    pub model: PathBuf,

    /// Months as a customer
    #[arg(long, default_value_t = 0.0)]
    pub tenure: f64,

    /// Satisfaction score, 1-5
    #[arg(long, default_value_t = 3.0)]
    pub satisfaction: f64,

    /// Lifetime order count
    #[arg(long, default_value_t = 0.0)]
    pub orders: f64,

    /// Coupons redeemed
    #[arg(long, default_value_t = 0.0)]
    pub coupons: f64,

    /// Cashback received
    #[arg(long, default_value_t = 0.0)]
    pub cashback: f64,

    /// Customer has filed a complaint
    #[arg(long)]
    pub complain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the evaluate command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Saved model artifact path
    pub model: PathBuf,

    /// Labeled CSV path
    pub data: PathBuf,
}

/// Arguments for the validate command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// YAML configuration path
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// YAML configuration path
    pub config: PathBuf,
}

/// Arguments for the inspect command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Saved model artifact path
    pub model: PathBuf,
}

/// Prediction output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled text panel
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parse CLI arguments from an iterator (testing hook).
///
/// # Errors
///
/// Returns clap's parse error for malformed arguments.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_parses_with_overrides() {
        let cli = parse_args([
            "abandonar",
            "train",
            "config.yaml",
            "--n-estimators",
            "50",
            "--seed",
            "7",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Command::Train(args) => {
                assert_eq!(args.config, PathBuf::from("config.yaml"));
                assert_eq!(args.n_estimators, Some(50));
                assert_eq!(args.seed, Some(7));
                assert!(args.dry_run);
                assert_eq!(args.max_depth, None);
            }
            _ => panic!("expected train command"),
        }
    }

    #[test]
    fn test_predict_defaults_match_record_defaults() {
        let cli = parse_args(["abandonar", "predict", "model.json"]).unwrap();
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.tenure, 0.0);
                assert_eq!(args.satisfaction, 3.0);
                assert_eq!(args.orders, 0.0);
                assert!(!args.complain);
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["abandonar", "--verbose", "validate", "c.yaml"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(parse_args(["abandonar"]).is_err());
    }

    #[test]
    fn test_json_format_parses() {
        let cli = parse_args([
            "abandonar", "predict", "m.json", "--format", "json", "--complain",
        ])
        .unwrap();
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.complain);
            }
            _ => panic!("expected predict command"),
        }
    }
}
