//! Domain-specific assertion macros for tasnif harnesses.
//!
//! These wrap plain assertions with failure messages that name the cascade
//! or search invariant being checked, so a red test says *which* rank or
//! ranking rule broke rather than dumping two structs.

// ---------------------------------------------------------------------------
// Cascade assertions
// ---------------------------------------------------------------------------

/// Assert the option set at a rank, by English keys in order.
///
/// ```rust
/// assert_options!(controller, Rank::Genus, ["Caracal", "Panthera"]);
/// ```
#[macro_export]
macro_rules! assert_options {
    ($controller:expr, $rank:expr, $expected:expr) => {{
        let state = $controller.rank_state($rank);
        let actual: Vec<&str> = state.options.iter().map(|o| o.english.as_str()).collect();
        let expected: Vec<&str> = $expected.to_vec();
        if actual != expected {
            panic!(
                "assert_options! failed at {}:\n  expected: {:?}\n  actual:   {:?}\n  (enabled: {})",
                $rank, expected, actual, state.enabled
            );
        }
    }};
}

/// Assert the terminal species result set, by English names in dataset order.
#[macro_export]
macro_rules! assert_species {
    ($controller:expr, $expected:expr) => {{
        let actual: Vec<&str> = $controller
            .species()
            .iter()
            .map(|r| r.species.english.as_str())
            .collect();
        let expected: Vec<&str> = $expected.to_vec();
        if actual != expected {
            panic!(
                "assert_species! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Search assertions
// ---------------------------------------------------------------------------

/// Assert the ranked hit list, by English species names best-first.
#[macro_export]
macro_rules! assert_hits {
    ($hits:expr, $expected:expr) => {{
        let actual: Vec<&str> = $hits.iter().map(|h| h.species.english.as_str()).collect();
        let expected: Vec<&str> = $expected.to_vec();
        if actual != expected {
            let scores: Vec<(&str, u32)> = $hits
                .iter()
                .map(|h| (h.species.english.as_str(), h.score))
                .collect();
            panic!(
                "assert_hits! failed:\n  expected: {:?}\n  actual:   {:?}\n  scores:   {:?}",
                expected, actual, scores
            );
        }
    }};
}
