//! Model artifact persistence
//!
//! An artifact bundles the trained classifier with the ordered feature
//! column names it was fit on, plus metadata. The column list is verified
//! against the crate's serving schema at load time: a mismatch is a hard
//! error, never something to patch around at prediction time.

mod format;
mod load;
mod model;
mod save;

pub use format::ArtifactFormat;
pub use load::load_artifact;
pub use model::{ArtifactMetadata, ModelArtifact, TrainedModel};
pub use save::save_artifact;
