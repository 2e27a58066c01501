//! Leveled output for the command surface

/// Output verbosity selected by the global `--quiet`/`--verbose` flags.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

/// True when a message gated at `required` prints under the active `level`.
fn should_print(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}

/// Print a message if the active level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if should_print(level, required) {
        println!("{msg}");
    }
}
