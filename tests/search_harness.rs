#![allow(unused)]
//! Search engine integration harness.
//!
//! # What this covers
//!
//! - **Field weighting**: official names weigh 4, descriptions 2, local
//!   and regional names 3, with a +5 exact and +2 prefix bonus per field.
//! - **Ranking and cutoff**: hits come back best-first, capped at five,
//!   with score ties broken by dataset order.
//! - **Bilingual queries**: Arabic and English queries match their
//!   respective fields through the same scoring path.
//! - **Path replay**: every hit carries the full six-rank path of its
//!   record, and replaying it through a fresh controller lands on exactly
//!   that species.
//! - **Highlighting**: the span splitter marks all case-insensitive
//!   occurrences and treats the query as literal text.
//! - **Properties** (proptest): scores are positive and descending, the
//!   hit count never exceeds five, and every hit's species exists in the
//!   dataset.
//!
//! # What this does NOT cover
//!
//! - Debounce timing (app-shell unit tests own that)
//! - Rendering of highlighted spans (tasnif-tui unit tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use proptest::prelude::*;
use rstest::rstest;
use tasnif_core::{search, CascadeController, Rank, MAX_RESULTS};

// ---------------------------------------------------------------------------
// Weighting
// ---------------------------------------------------------------------------

/// "arabian" prefix-matches two official English names: 4 + 2 each. The
/// Oryx record comes first in the dataset, so it wins the tie.
#[test]
fn prefix_match_on_official_names() {
    let hits = search("arabian", &arabian_index());
    assert_hits!(hits, ["Arabian Oryx", "Arabian Leopard"]);
    assert_eq!(hits[0].score, 6);
    assert_eq!(hits[1].score, 6);
}

/// An exact official-name hit stacks contains + exact + prefix.
#[test]
fn exact_match_outranks_everything() {
    let hits = search("caracal", &arabian_index());
    assert_hits!(hits, ["Caracal"]);
    assert_eq!(hits[0].score, 11);
}

#[rstest]
#[case::description_only("dung", "Sacred Scarab", 2)]
#[case::local_arabic_name("عناق الأرض", "Caracal", 10)]
#[case::regional_name("مهاة", "Arabian Oryx", 5)]
fn field_weights(#[case] query: &str, #[case] expected: &str, #[case] score: u32) {
    let hits = search(query, &arabian_index());
    assert_hits!(hits, [expected]);
    assert_eq!(hits[0].score, score, "query {query:?}");
}

/// Arabic official names score through the same name weight.
#[test]
fn arabic_query_matches_official_arabic_name() {
    let hits = search("المها العربي", &arabian_index());
    assert_hits!(hits, ["Arabian Oryx"]);
    // contains + exact + prefix on the Arabic official name
    assert_eq!(hits[0].score, 11);
}

/// A species without local names can only score on names and descriptions.
#[test]
fn absent_local_names_contribute_nothing() {
    let hits = search("saker", &arabian_index());
    assert_hits!(hits, ["Saker Falcon"]);
    assert_eq!(hits[0].score, 6); // name contains + prefix
}

#[test]
fn no_match_means_no_hits() {
    assert!(search("zebra", &arabian_index()).is_empty());
    assert!(search("", &arabian_index()).is_empty());
}

// ---------------------------------------------------------------------------
// Ranking and cutoff
// ---------------------------------------------------------------------------

/// More than five matching records: only the top five come back, and ties
/// keep dataset order.
#[test]
fn results_cap_at_five_with_stable_ties() {
    let records: Vec<_> = (0..8)
        .map(|i| {
            RecordBuilder::named(&format!("Desert Skink {i}"))
                .genus(bte(&format!("Genus{i}")))
                .build()
        })
        .collect();
    let index = tasnif_core::TaxonomyIndex::new(records);

    let hits = search("desert skink", &index);
    assert_eq!(hits.len(), MAX_RESULTS);
    assert_hits!(
        hits,
        [
            "Desert Skink 0",
            "Desert Skink 1",
            "Desert Skink 2",
            "Desert Skink 3",
            "Desert Skink 4"
        ]
    );
}

/// A stronger match ranks above weaker ones regardless of dataset order.
#[test]
fn higher_scores_rank_first() {
    let hits = search("وشق", &arabian_index());
    // "الوشق" contains the query but is not an exact or prefix match.
    assert_hits!(hits, ["Caracal"]);
    assert_eq!(hits[0].score, 4);
}

// ---------------------------------------------------------------------------
// Path replay
// ---------------------------------------------------------------------------

#[test]
fn hit_path_replays_to_the_matched_species() {
    let index = arabian_index();
    let hits = search("leopard", &index);
    assert_hits!(hits, ["Arabian Leopard"]);

    let mut controller = CascadeController::new(arabian_index());
    controller.apply_path(&hits[0].path);
    assert_species!(controller, ["Arabian Leopard"]);
    assert_eq!(
        controller.selection(Rank::Genus).map(|v| v.english.as_str()),
        Some("Panthera")
    );
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

#[test]
fn highlight_agrees_with_scoring_containment() {
    let spans = tasnif_core::highlight("Arabian Oryx", "ARABIAN");
    assert_eq!(spans.len(), 2);
    assert!(spans[0].matched);
    assert_eq!(spans[0].text, "Arabian");
    assert!(!spans[1].matched);
}

#[test]
fn highlight_escapes_regex_metacharacters() {
    let spans = tasnif_core::highlight("a+b and ab", "a+b");
    assert_eq!(spans[0].text, "a+b");
    assert!(spans[0].matched);
    // "ab" must NOT match the literal query "a+b"
    assert_eq!(spans[1].text, " and ab");
    assert!(!spans[1].matched);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// For any query, the hit list is at most five long, strictly
    /// positive-scored, sorted descending, and drawn from the dataset.
    #[test]
    fn hits_are_ranked_capped_and_real(query in "[a-zA-Z\u{0621}-\u{064A} ]{0,12}") {
        let index = arabian_index();
        let hits = search(&query, &index);

        prop_assert!(hits.len() <= MAX_RESULTS);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for hit in &hits {
            prop_assert!(hit.score > 0);
            prop_assert!(index
                .records()
                .iter()
                .any(|r| r.species.english == hit.species.english));
        }
    }

    /// Search is a pure function of (query, dataset).
    #[test]
    fn search_is_deterministic(query in "[a-z ]{1,10}") {
        let index = arabian_index();
        prop_assert_eq!(search(&query, &index), search(&query, &index));
    }
}
