//! JSON document loading.
//!
//! The dataset is a single JSON object `{"taxonomy": [...]}`. Required
//! record fields missing from the document surface here as a parse error;
//! optional fields (`LocalNames`, `Media`, and their sub-lists) default to
//! absent and are tolerated everywhere downstream.

use crate::DatasetError;
use serde::Deserialize;
use std::path::Path;
use tasnif_core::TaxonomyRecord;

/// The top-level document shape. Nothing else in the file is read.
#[derive(Debug, Deserialize)]
struct Document {
    taxonomy: Vec<TaxonomyRecord>,
}

/// Read and parse a dataset file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<TaxonomyRecord>, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parse a dataset document from a string.
pub fn parse_str(text: &str) -> Result<Vec<TaxonomyRecord>, DatasetError> {
    let document: Document = serde_json::from_str(text)?;
    Ok(document.taxonomy)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
