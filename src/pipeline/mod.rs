// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod builder;
mod progress;

pub use builder::{BuildReport, IndexBuilder};
pub use progress::{BuildStats, ProgressTracker};
