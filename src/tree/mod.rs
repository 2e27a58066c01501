//! Decision tree and random forest classifiers
//!
//! Array-based tree storage (parallel to sklearn's exported structure) with
//! CART/Gini training. Leaves keep their class counts so `predict_proba`
//! returns the empirical leaf distribution rather than a hard vote.

mod forest;
mod node;
mod train;


pub use forest::RandomForestClassifier;
pub use node::{DecisionTreeClassifier, TreeNode};
pub use train::TreeParams;
