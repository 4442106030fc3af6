//! Batch slicing driven by a TOML manifest

pub mod manifest;
pub mod runner;

pub use manifest::{BatchManifest, MovieEntry, DEFAULT_BATCH_TEMPLATE};
pub use runner::{run_batch, BatchReport};
