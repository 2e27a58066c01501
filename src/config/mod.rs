//! Declarative training configuration
//!
//! A YAML `TrainSpec` drives the `train` command: which algorithm, its
//! hyperparameters, where the labeled CSV lives, and where the artifact
//! lands. CLI flags can override individual fields after loading.

mod cli;
mod loader;
mod schema;

pub use cli::{
    parse_args, Cli, Command, EvaluateArgs, InfoArgs, InspectArgs, OutputFormat, PredictArgs,
    TrainArgs, ValidateArgs,
};
pub use loader::{apply_overrides, load_config, validate_spec};
pub use schema::{Algorithm, DataSection, ModelSection, OutputSection, TrainSpec};
