//! Score, badge, and completion accounting across challenge resolutions.

pub mod tracker;

pub use tracker::{ProgressionTracker, EXPERT_SCORE_THRESHOLD};
