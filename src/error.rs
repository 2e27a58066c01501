//! Crate-wide error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the churn pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Training error: {0}")]
    Train(String),

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Feature schema mismatch: model expects [{expected}], artifact carries [{found}]")]
    SchemaMismatch { expected: String, found: String },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("missing model section".to_string());
        assert!(format!("{err}").contains("Config error"));

        let err = Error::SchemaMismatch {
            expected: "Feature1, Feature2, Feature3".to_string(),
            found: "Feature1".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("Feature1, Feature2, Feature3"));

        let err = Error::ArtifactNotFound(PathBuf::from("churn_model.json"));
        assert!(format!("{err}").contains("churn_model.json"));
    }
}
