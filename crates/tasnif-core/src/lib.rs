//! tasnif-core — bilingual taxonomy core library.
//!
//! This crate holds the pure domain logic of tasnif: the dataset types,
//! the cascade filter engine, and the ranked multi-field search.
//!
//! # Architecture
//!
//! ```text
//! dataset ──► TaxonomyIndex ──► CascadeController ──► UI
//!                    │
//!                    └────────► SearchEngine ───────► UI
//! ```
//!
//! The index wraps the flat record list loaded once at startup and never
//! mutated. The controller owns the only piece of mutable state (the
//! six-rank selection); search is stateless over the same index. The UI
//! is a pure renderer of controller output and search hits.

pub mod cascade;
pub mod config;
pub mod index;
pub mod search;
pub mod types;

pub use cascade::{CascadeController, RankState};
pub use index::{Selections, TaxonomyIndex};
pub use search::{highlight, search, HighlightSpan, SearchHit, MAX_RESULTS};
pub use types::{
    BilingualText, HierarchyPath, LocalNames, Media, MediaItem, Rank, Reference, ReferenceKind,
    RegionalName, Species, TaxonomyRecord,
};
