//! tasnif-data — taxonomy dataset loading for tasnif.
//!
//! The core never fetches data itself; this crate is the loading
//! collaborator. It understands exactly one document shape — a JSON object
//! with a `taxonomy` field holding the flat record list — and ships an
//! embedded sample dataset so the binary runs with no files on disk.

pub mod loader;
pub mod sample;

pub use loader::{load_file, parse_str};

/// Failures while obtaining the dataset. Reported once at the boundary;
/// the core is never invoked when loading fails.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset document: {0}")]
    Parse(#[from] serde_json::Error),
}
