//! CLI module
//!
//! Command handlers and output utilities. Argument definitions live in
//! `config::cli` next to the YAML schema they override.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
