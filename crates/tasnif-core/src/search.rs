//! Ranked multi-field search over the species list.
//!
//! Independent of cascade selection state: the engine sees only the flat
//! record list. Every species is scored across an ordered field list
//! (official names, bilingual descriptions, then local and regional
//! names); matches accumulate weighted contributions and the top five
//! records come back with their full hierarchy path attached so the caller
//! can replay the cascade.
//!
//! Queries are literal substrings, never patterns. The caller boundary is
//! expected to trim and lower-case the input and enforce its own minimum
//! length; the engine itself has no length requirement.

use crate::index::TaxonomyIndex;
use crate::types::{HierarchyPath, Species};
use regex::RegexBuilder;

/// Maximum number of hits returned per query.
pub const MAX_RESULTS: usize = 5;

/// Weight for a match in an official species name (field index 0–1).
const NAME_WEIGHT: u32 = 4;
/// Weight for a match in a description field (field index 2–3).
const DESCRIPTION_WEIGHT: u32 = 2;
/// Weight for a match in any local or regional name (field index 4+).
const LOCAL_NAME_WEIGHT: u32 = 3;
/// Bonus when a field equals the query exactly.
const EXACT_BONUS: u32 = 5;
/// Bonus when a field starts with the query. Stacks with the exact bonus.
const PREFIX_BONUS: u32 = 2;

/// One ranked search result.
///
/// Owns its payload (cloned from the matched record) so the UI can keep a
/// hit list alive while the cascade controller mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub species: Species,
    /// Full six-rank path of the matched record, for cascade replay.
    pub path: HierarchyPath,
    pub score: u32,
}

/// Score every species against `query` and return the top
/// [`MAX_RESULTS`] hits, descending by score.
///
/// Zero-score records are excluded. Ties break by original dataset order
/// (the earlier record wins), which together with the fixed weights makes
/// the ranking deterministic for a given dataset and query.
pub fn search(query: &str, index: &TaxonomyIndex) -> Vec<SearchHit> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = index
        .records()
        .iter()
        .filter_map(|record| {
            let score = score_species(&query, &record.species);
            (score > 0).then(|| SearchHit {
                species: record.species.clone(),
                path: record.path(),
                score,
            })
        })
        .collect();

    // Stable sort: equal scores keep dataset order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(MAX_RESULTS);
    tracing::debug!(%query, hits = hits.len(), "search evaluated");
    hits
}

/// Total weighted score of one species for a lower-cased query.
fn score_species(query: &str, species: &Species) -> u32 {
    let mut score = 0;
    for (position, field) in search_fields(species).enumerate() {
        if field.is_empty() {
            continue;
        }
        let field = field.to_lowercase();
        if !field.contains(query) {
            continue;
        }
        score += match position {
            0 | 1 => NAME_WEIGHT,
            2 | 3 => DESCRIPTION_WEIGHT,
            _ => LOCAL_NAME_WEIGHT,
        };
        if field == query {
            score += EXACT_BONUS;
        }
        if field.starts_with(query) {
            score += PREFIX_BONUS;
        }
    }
    score
}

/// The ordered field list a species is matched against. Position matters
/// for weighting: official names, then descriptions, then the flattened
/// (possibly absent) local and regional name groups.
fn search_fields(species: &Species) -> impl Iterator<Item = &str> {
    let local = species.local_names.as_ref();
    [
        species.arabic.as_str(),
        species.english.as_str(),
        species.description.arabic.as_str(),
        species.description.english.as_str(),
    ]
    .into_iter()
    .chain(
        local
            .into_iter()
            .flat_map(|l| l.arabic.iter().map(String::as_str)),
    )
    .chain(
        local
            .into_iter()
            .flat_map(|l| l.english.iter().map(String::as_str)),
    )
    .chain(
        local
            .into_iter()
            .flat_map(|l| l.regional.iter().map(|r| r.name.as_str())),
    )
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// A run of text, either matched by the query or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub matched: bool,
}

/// Split `text` into spans, marking every case-insensitive occurrence of
/// `query` as matched.
///
/// The matching rule (case-insensitive, all occurrences, literal
/// substring) must stay consistent with the containment test used for
/// scoring, so the query is escaped before it reaches the regex engine.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    let plain = |t: &str| HighlightSpan {
        text: t.to_string(),
        matched: false,
    };

    if text.is_empty() || query.is_empty() {
        return vec![plain(text)];
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        // Unreachable for escaped input; degrade to an unhighlighted span.
        return vec![plain(text)];
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            spans.push(plain(&text[last..found.start()]));
        }
        spans.push(HighlightSpan {
            text: found.as_str().to_string(),
            matched: true,
        });
        last = found.end();
    }
    if last < text.len() || spans.is_empty() {
        spans.push(plain(&text[last..]));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
