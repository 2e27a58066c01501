//! Abandonar: churn prediction pipeline
//!
//! Predicts customer churn from tabular attributes through a strictly
//! one-way pipeline: raw record → derived feature vector → trained
//! classifier → risk-banded result.
//!
//! - [`record`]: raw customer attributes with defaults and clamping
//! - [`features`]: the fixed 3-feature derivation shared by training and
//!   serving (the single schema source of truth)
//! - [`tree`]: CART decision tree and random forest classifiers
//! - [`oracle`]: the capability trait the presenter consumes
//! - [`io`]: model artifact persistence with hard schema verification
//! - [`data`]: labeled CSV loading and seeded train/test splitting
//! - [`eval`]: confusion matrix and classification report
//! - [`risk`]: 3-tier risk banding and result rendering
//! - [`config`] / [`cli`]: declarative YAML training config and commands
//!
//! # Example
//!
//! ```
//! use abandonar::features::FeatureVector;
//! use abandonar::record::CustomerRecord;
//! use abandonar::risk::RiskBand;
//!
//! let record = CustomerRecord::new(12.0, 3.0, 10.0, 5.0, 50.0, false);
//! let features = FeatureVector::derive(&record);
//! assert!(features.is_finite());
//! assert_eq!(RiskBand::from_probability(0.85), RiskBand::High);
//! ```

pub mod cli;
pub mod config;
pub mod data;
mod error;
pub mod eval;
pub mod features;
pub mod io;
pub mod oracle;
pub mod pipeline;
pub mod record;
pub mod risk;
pub mod tree;

pub use error::{Error, Result};
pub use features::{FeatureVector, FEATURE_COLUMNS};
pub use oracle::{ChurnModel, PredictionResult};
pub use record::CustomerRecord;
pub use risk::RiskBand;
