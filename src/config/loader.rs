//! Config loading, validation, and CLI overrides

use super::cli::TrainArgs;
use super::schema::{Algorithm, TrainSpec};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate a YAML training spec.
///
/// # Errors
///
/// Returns `Error::Config` on a missing/unreadable file, malformed YAML,
/// or a spec that fails validation.
pub fn load_config(path: impl AsRef<Path>) -> Result<TrainSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;

    let spec: TrainSpec = serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid YAML in {}: {e}", path.display())))?;

    validate_spec(&spec)?;
    Ok(spec)
}

/// Check spec invariants that the schema types cannot express.
///
/// # Errors
///
/// Returns `Error::Config` naming the first violated constraint.
pub fn validate_spec(spec: &TrainSpec) -> Result<()> {
    if spec.data.train.as_os_str().is_empty() {
        return Err(Error::Config("data.train must not be empty".to_string()));
    }
    if !(spec.data.test_split > 0.0 && spec.data.test_split < 1.0) {
        return Err(Error::Config(format!(
            "data.test_split must be in (0, 1), got {}",
            spec.data.test_split
        )));
    }
    if spec.model.algorithm == Algorithm::Forest && spec.model.n_estimators == 0 {
        return Err(Error::Config(
            "model.n_estimators must be >= 1".to_string(),
        ));
    }
    if spec.model.max_depth == 0 {
        return Err(Error::Config("model.max_depth must be >= 1".to_string()));
    }
    if spec.model.min_samples_split < 2 {
        return Err(Error::Config(
            "model.min_samples_split must be >= 2".to_string(),
        ));
    }
    if spec.output.path.as_os_str().is_empty() {
        return Err(Error::Config("output.path must not be empty".to_string()));
    }
    Ok(())
}

/// Apply command-line overrides onto a loaded spec.
pub fn apply_overrides(spec: &mut TrainSpec, args: &TrainArgs) {
    if let Some(n) = args.n_estimators {
        spec.model.n_estimators = n;
    }
    if let Some(depth) = args.max_depth {
        spec.model.max_depth = depth;
    }
    if let Some(seed) = args.seed {
        spec.model.seed = seed;
    }
    if let Some(ref output) = args.output {
        spec.output.path.clone_from(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn minimal_spec() -> TrainSpec {
        serde_yaml::from_str("data:\n  train: customers.csv\n").unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "data:\n  train: customers.csv").unwrap();
        file.flush().unwrap();

        let spec = load_config(file.path()).unwrap();
        assert_eq!(spec.data.train, PathBuf::from("customers.csv"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = load_config("no_such_config.yaml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_malformed_yaml_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "data: [unclosed").unwrap();
        file.flush().unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_split() {
        let mut spec = minimal_spec();
        spec.data.test_split = 0.0;
        assert!(validate_spec(&spec).is_err());
        spec.data.test_split = 1.5;
        assert!(validate_spec(&spec).is_err());
        spec.data.test_split = 0.25;
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_estimators_for_forest() {
        let mut spec = minimal_spec();
        spec.model.n_estimators = 0;
        assert!(validate_spec(&spec).is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_tree_params() {
        let mut spec = minimal_spec();
        spec.model.max_depth = 0;
        assert!(validate_spec(&spec).is_err());

        let mut spec = minimal_spec();
        spec.model.min_samples_split = 1;
        assert!(validate_spec(&spec).is_err());
    }

    #[test]
    fn test_overrides_apply_only_when_present() {
        let mut spec = minimal_spec();
        let args = TrainArgs {
            config: PathBuf::from("c.yaml"),
            n_estimators: Some(10),
            max_depth: None,
            seed: Some(7),
            output: Some(PathBuf::from("out.json")),
            dry_run: false,
        };
        apply_overrides(&mut spec, &args);

        assert_eq!(spec.model.n_estimators, 10);
        assert_eq!(spec.model.max_depth, 8);
        assert_eq!(spec.model.seed, 7);
        assert_eq!(spec.output.path, PathBuf::from("out.json"));
    }
}
