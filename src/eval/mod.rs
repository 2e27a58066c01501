//! Model evaluation: confusion matrix and classification report

mod classification;

pub use classification::{ClassMetrics, ClassificationReport, ConfusionMatrix};
