//! Embedded sample dataset — Arabian Peninsula wildlife.
//!
//! Bundled via [`include_str!`] so the application works without any files
//! on disk; the binary falls back to it when no dataset path is given.

use tasnif_core::TaxonomyRecord;

const ARABIAN_DATASET_SRC: &str = include_str!("datasets/arabian.json");

/// Parse and return the embedded sample records.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed. The sample document is part
/// of the crate and validated by tests, so this should never happen in
/// practice.
pub fn records() -> Vec<TaxonomyRecord> {
    crate::loader::parse_str(ARABIAN_DATASET_SRC)
        .expect("embedded sample dataset must be valid JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
