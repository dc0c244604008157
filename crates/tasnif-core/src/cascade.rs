//! CascadeController — the stateful wrapper around [`TaxonomyIndex`].
//!
//! Tracks the current selection at each of the six ranks and, on any rank
//! change, recomputes the downstream option sets and the terminal species
//! set. The UI is a pure renderer of this state; it never derives options
//! itself.
//!
//! # Cascade invariant
//!
//! Slot *i* is only meaningful when slots `0..i` are all set. Setting slot
//! *i* always clears slots `i+1..`. Only the immediate next rank is
//! repopulated on a change; deeper ranks are emptied and recomputed lazily
//! when the user reaches them, which is observably equivalent to an eager
//! recompute but cheaper.

use crate::index::{Selections, TaxonomyIndex};
use crate::types::{BilingualText, HierarchyPath, Rank, TaxonomyRecord};

/// Presentation state of one rank selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankState {
    /// Whether the selector accepts input. Disabled selectors are empty.
    pub enabled: bool,
    /// Valid options, sorted ascending by English text. Ties (which the
    /// uniqueness invariant rules out) keep encounter order.
    pub options: Vec<BilingualText>,
}

impl RankState {
    fn disabled() -> Self {
        Self::default()
    }

    fn enabled(options: Vec<BilingualText>) -> Self {
        Self {
            enabled: true,
            options,
        }
    }
}

/// Stateful cascade over a [`TaxonomyIndex`].
///
/// Mutated only through [`on_rank_changed`](Self::on_rank_changed) (and the
/// replay/reset helpers built on it), one external event at a time; there
/// is no concurrent mutation in the model.
#[derive(Debug, Clone)]
pub struct CascadeController {
    index: TaxonomyIndex,
    slots: Selections,
    ranks: [RankState; Rank::COUNT],
    /// Indices into the dataset of the terminal species result set. Empty
    /// unless Genus is set with a complete ancestor chain.
    results: Vec<usize>,
}

impl CascadeController {
    /// Build a controller with the initial state: everything unset, the
    /// Kingdom selector populated, deeper ranks disabled. An empty dataset
    /// yields zero options everywhere; that is not an error.
    pub fn new(index: TaxonomyIndex) -> Self {
        let kingdoms = sorted_options(index.options_at(Rank::Kingdom, &[]));
        let mut ranks: [RankState; Rank::COUNT] = Default::default();
        ranks[Rank::Kingdom.index()] = RankState::enabled(kingdoms);
        Self {
            index,
            slots: Default::default(),
            ranks,
            results: Vec::new(),
        }
    }

    /// The wrapped index, for collaborators that only need the record list
    /// (the search engine, the UI's card renderer).
    pub fn index(&self) -> &TaxonomyIndex {
        &self.index
    }

    /// Current selection at a rank, if any.
    pub fn selection(&self, rank: Rank) -> Option<&BilingualText> {
        self.slots[rank.index()].as_ref()
    }

    /// Presentation state of a rank selector.
    pub fn rank_state(&self, rank: Rank) -> &RankState {
        &self.ranks[rank.index()]
    }

    /// The terminal species result set, in dataset order. Empty unless all
    /// six ranks are selected.
    pub fn species(&self) -> Vec<&TaxonomyRecord> {
        self.results
            .iter()
            .filter_map(|&i| self.index.record(i))
            .collect()
    }

    /// Record indices of the terminal result set.
    pub fn species_indices(&self) -> &[usize] {
        &self.results
    }

    /// Apply a single selection change at `rank`.
    ///
    /// Downstream slots are always cleared, the immediate next rank is
    /// repopulated (or disabled when the chain through `rank` is broken),
    /// and the terminal result set is recomputed only when Genus completes
    /// the chain. A value that is stale against the current option list is
    /// stored as-is; downstream option sets simply come back empty.
    pub fn on_rank_changed(&mut self, rank: Rank, value: Option<BilingualText>) {
        tracing::debug!(%rank, value = ?value.as_ref().map(|v| &v.english), "rank changed");

        let depth = rank.index();
        self.slots[depth] = value;
        for deeper in depth + 1..Rank::COUNT {
            self.slots[deeper] = None;
            self.ranks[deeper] = RankState::disabled();
        }
        self.results.clear();

        // A broken chain through this rank leaves everything below
        // disabled and the result set empty.
        if !self.chain_set_through(depth) {
            return;
        }

        match rank.next() {
            Some(next) => {
                let ancestors: Vec<BilingualText> = self.slots[..=depth]
                    .iter()
                    .flatten()
                    .cloned()
                    .collect();
                let options = sorted_options(self.index.options_at(next, &ancestors));
                tracing::debug!(rank = %next, count = options.len(), "options repopulated");
                self.ranks[next.index()] = RankState::enabled(options);
            }
            None => {
                // Genus selected with a complete chain: emit the species.
                self.results = self.index.matching_indices(&self.slots);
                tracing::debug!(count = self.results.len(), "terminal species set");
            }
        }
    }

    /// Replay a full hierarchy path, rank by rank, shallowest first.
    ///
    /// Each step fully completes (including repopulating the next rank's
    /// options) before the next value is applied; rank *i+1*'s valid
    /// domain depends on rank *i*'s committed selection, so the order is a
    /// strict sequential dependency. Used when the user picks a search hit.
    pub fn apply_path(&mut self, path: &HierarchyPath) {
        for (rank, value) in path.iter() {
            self.on_rank_changed(rank, Some(value.clone()));
        }
    }

    /// Return to the initial all-unset state.
    pub fn reset(&mut self) {
        self.on_rank_changed(Rank::Kingdom, None);
    }

    fn chain_set_through(&self, depth: usize) -> bool {
        self.slots[..=depth].iter().all(Option::is_some)
    }
}

fn sorted_options(mut options: Vec<BilingualText>) -> Vec<BilingualText> {
    // Stable sort: equal English keys keep encounter order.
    options.sort_by(|a, b| a.english.cmp(&b.english));
    options
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
