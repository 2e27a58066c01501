//! Artifact saving functionality

use super::format::ArtifactFormat;
use super::model::ModelArtifact;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a model artifact to a file.
///
/// The format is detected from the file extension (`.json`, `.yaml`,
/// `.yml`).
///
/// # Example
///
/// ```no_run
/// use abandonar::io::{save_artifact, ArtifactMetadata, ModelArtifact, TrainedModel};
/// use abandonar::tree::{DecisionTreeClassifier, TreeParams};
///
/// let x = vec![vec![0.1, 0.1, 0.1], vec![0.9, 0.9, 0.9]];
/// let y = vec![0, 1];
/// let tree = DecisionTreeClassifier::fit(&x, &y, TreeParams::default()).unwrap();
/// let artifact = ModelArtifact::new(
///     ArtifactMetadata::new("churn-model", "decision_tree", 2),
///     TrainedModel::DecisionTree(tree),
/// );
/// save_artifact(&artifact, "churn_model.json").unwrap();
/// ```
pub fn save_artifact(artifact: &ModelArtifact, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = format_for(path)?;

    let data = match format {
        ArtifactFormat::Json => serde_json::to_string_pretty(artifact)
            .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?,
        ArtifactFormat::Yaml => serde_yaml::to_string(artifact)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
    };

    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

pub(crate) fn format_for(path: &Path) -> Result<ArtifactFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Serialization("file has no extension".to_string()))?;

    ArtifactFormat::from_extension(ext)
        .ok_or_else(|| Error::Serialization(format!("unsupported file extension: {ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_errors() {
        assert!(format_for(Path::new("model")).is_err());
        assert!(format_for(Path::new("model.pkl")).is_err());
        assert!(format_for(Path::new("model.json")).is_ok());
    }
}
