//! Artifact loading functionality
//!
//! Loading verifies the persisted feature schema against the serving
//! schema. A mismatch fails the load outright: the one in-process model is
//! loaded once at startup, and a model fit on different columns must never
//! answer predictions.

use super::format::ArtifactFormat;
use super::model::ModelArtifact;
use super::save::format_for;
use crate::error::{Error, Result};
use crate::features::FEATURE_COLUMNS;
use std::fs;
use std::path::Path;

/// Load a model artifact from a file.
///
/// The format is detected from the file extension.
///
/// # Errors
///
/// - `Error::ArtifactNotFound` when the file does not exist
/// - `Error::Serialization` on unsupported extension, malformed content,
///   or a model whose node array fails structural validation
/// - `Error::SchemaMismatch` when the persisted feature columns differ from
///   the serving schema in names, order, or arity
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ArtifactNotFound(path.to_path_buf()));
    }

    let format = format_for(path)?;
    let content = fs::read_to_string(path)?;

    let artifact: ModelArtifact = match format {
        ArtifactFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?,
        ArtifactFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}")))?,
    };

    if !artifact.schema_matches() {
        return Err(Error::SchemaMismatch {
            expected: FEATURE_COLUMNS.join(", "),
            found: artifact.feature_columns.join(", "),
        });
    }

    // Serde accepts any well-formed document; a tampered node array must
    // fail here, not panic at first predict.
    artifact
        .model
        .validate()
        .map_err(|e| Error::Serialization(format!("invalid model structure: {e}")))?;

    Ok(artifact)
}
