//! Abandonar CLI
//!
//! Churn prediction entry point.
//!
//! # Usage
//!
//! ```bash
//! # Train from config
//! abandonar train config.yaml
//!
//! # Train with overrides
//! abandonar train config.yaml --n-estimators 50 --seed 7
//!
//! # Score a customer
//! abandonar predict churn_model.json --tenure 12 --satisfaction 3 \
//!     --orders 10 --coupons 5 --cashback 50
//!
//! # Evaluate on labeled data
//! abandonar evaluate churn_model.json customers.csv
//!
//! # Validate / describe a config
//! abandonar validate config.yaml
//! abandonar info config.yaml
//!
//! # Inspect a saved artifact
//! abandonar inspect churn_model.json
//! ```

use abandonar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
