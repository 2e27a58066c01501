//! YAML schema for the training specification

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classifier family to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single CART decision tree
    Tree,
    /// Bootstrap ensemble of CART trees
    #[default]
    Forest,
}

/// Complete training specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSpec {
    /// Model configuration
    #[serde(default)]
    pub model: ModelSection,

    /// Data configuration
    pub data: DataSection,

    /// Artifact output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Model family and hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSection {
    /// Algorithm to train
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Number of trees (forest only)
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,

    /// Maximum tree depth
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Minimum samples required to split a node
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,

    /// Minimum samples per leaf
    #[serde(default = "default_min_samples_leaf")]
    pub min_samples_leaf: usize,

    /// Seed for bootstrap resampling and the train/test shuffle
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            n_estimators: default_n_estimators(),
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            seed: default_seed(),
        }
    }
}

/// Training data location and split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    /// Labeled CSV path
    pub train: PathBuf,

    /// Held-out fraction for evaluation
    #[serde(default = "default_test_split")]
    pub test_split: f64,
}

/// Where the trained artifact lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Artifact path; extension selects the format
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Model name recorded in the artifact metadata
    #[serde(default = "default_model_name")]
    pub name: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            name: default_model_name(),
        }
    }
}

fn default_n_estimators() -> usize {
    100
}

fn default_max_depth() -> usize {
    8
}

fn default_min_samples_split() -> usize {
    2
}

fn default_min_samples_leaf() -> usize {
    1
}

fn default_seed() -> u64 {
    42
}

fn default_test_split() -> f64 {
    0.2
}

fn default_output_path() -> PathBuf {
    PathBuf::from("churn_model.json")
}

fn default_model_name() -> String {
    "churn-model".to_string()
}
