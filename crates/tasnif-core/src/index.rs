//! TaxonomyIndex — pure queries over the flat record list.
//!
//! The index is the single source of truth for "what is valid where": the
//! cascade controller asks it for the option set at a rank given the
//! ancestor selections, and for the records matching a partial selection.
//! Both queries are pure functions of `(dataset, arguments)`, have no side
//! effects, and may be called arbitrarily often.

use crate::types::{BilingualText, Rank, TaxonomyRecord};
use std::collections::HashSet;

/// Per-rank selection state: `None` slots are wildcards.
///
/// The cascade invariant (slot *i* set only when slots `0..i` are set) is
/// maintained by the controller; the index treats any combination as a
/// plain filter.
pub type Selections = [Option<BilingualText>; Rank::COUNT];

/// Wraps the flat taxonomy list loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    records: Vec<TaxonomyRecord>,
}

impl TaxonomyIndex {
    pub fn new(records: Vec<TaxonomyRecord>) -> Self {
        Self { records }
    }

    /// All records in original dataset order.
    pub fn records(&self) -> &[TaxonomyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a previously returned index.
    pub fn record(&self, index: usize) -> Option<&TaxonomyRecord> {
        self.records.get(index)
    }

    /// Distinct values present at `rank` among records whose values at
    /// every ancestor rank equal `ancestors` (English-keyed, per the
    /// [`BilingualText`] identity rule).
    ///
    /// `ancestors` must hold exactly one value per ancestor rank, i.e.
    /// `ancestors.len() == rank.index()`. Results come back in encounter
    /// order, first representative winning when duplicate English keys
    /// carry differing Arabic text (well-formed data never does).
    pub fn options_at(&self, rank: Rank, ancestors: &[BilingualText]) -> Vec<BilingualText> {
        debug_assert_eq!(
            ancestors.len(),
            rank.index(),
            "ancestor selections must cover exactly the ranks above {rank}"
        );

        let mut seen: HashSet<&str> = HashSet::new();
        let mut options = Vec::new();
        for record in &self.records {
            if !self.matches_ancestors(record, ancestors) {
                continue;
            }
            let value = record.rank_value(rank);
            if seen.insert(value.english.as_str()) {
                options.push(value.clone());
            }
        }
        options
    }

    /// Records whose values at every *set* rank equal the corresponding
    /// selection; unset ranks are wildcards. Dataset order is preserved.
    pub fn records_matching(&self, selections: &Selections) -> Vec<&TaxonomyRecord> {
        self.matching_indices(selections)
            .into_iter()
            .filter_map(|i| self.records.get(i))
            .collect()
    }

    /// Index form of [`records_matching`](Self::records_matching), for
    /// callers that hold positions rather than borrows.
    pub fn matching_indices(&self, selections: &Selections) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                Rank::ALL.iter().all(|&rank| {
                    match &selections[rank.index()] {
                        Some(value) => record.rank_value(rank).same_taxon(value),
                        None => true,
                    }
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn matches_ancestors(&self, record: &TaxonomyRecord, ancestors: &[BilingualText]) -> bool {
        ancestors
            .iter()
            .zip(Rank::ALL)
            .all(|(value, rank)| record.rank_value(rank).same_taxon(value))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BilingualText, Species};
    use pretty_assertions::assert_eq;

    fn bt(ar: &str, en: &str) -> BilingualText {
        BilingualText::new(ar, en)
    }

    fn record(path: [(&str, &str); 6], species_en: &str) -> TaxonomyRecord {
        let [k, p, c, o, f, g] = path;
        TaxonomyRecord {
            kingdom: bt(k.0, k.1),
            phylum: bt(p.0, p.1),
            class: bt(c.0, c.1),
            order: bt(o.0, o.1),
            family: bt(f.0, f.1),
            genus: bt(g.0, g.1),
            species: Species {
                arabic: format!("نوع {species_en}"),
                english: species_en.to_string(),
                description: bt("وصف", "description"),
                habitat: bt("موطن", "habitat"),
                local_names: None,
                references: vec![],
                media: None,
            },
        }
    }

    fn small_index() -> TaxonomyIndex {
        TaxonomyIndex::new(vec![
            record(
                [
                    ("حيوانات", "Animalia"),
                    ("حبليات", "Chordata"),
                    ("ثدييات", "Mammalia"),
                    ("لواحم", "Carnivora"),
                    ("سنوريات", "Felidae"),
                    ("نمور", "Panthera"),
                ],
                "Arabian Leopard",
            ),
            record(
                [
                    ("حيوانات", "Animalia"),
                    ("حبليات", "Chordata"),
                    ("طيور", "Aves"),
                    ("صقريات", "Falconiformes"),
                    ("صقور", "Falconidae"),
                    ("صقر", "Falco"),
                ],
                "Saker Falcon",
            ),
            record(
                [
                    ("حيوانات", "Animalia"),
                    ("مفصليات", "Arthropoda"),
                    ("حشرات", "Insecta"),
                    ("خنافس", "Coleoptera"),
                    ("جعليات", "Scarabaeidae"),
                    ("جعل", "Scarabaeus"),
                ],
                "Sacred Scarab",
            ),
            record(
                [
                    ("نباتات", "Plantae"),
                    ("بذريات", "Tracheophyta"),
                    ("ثنائيات الفلقة", "Magnoliopsida"),
                    ("قرنيات", "Fabales"),
                    ("بقوليات", "Fabaceae"),
                    ("سمر", "Vachellia"),
                ],
                "Umbrella Thorn",
            ),
        ])
    }

    #[test]
    fn options_at_kingdom_are_distinct() {
        let index = small_index();
        let kingdoms = index.options_at(Rank::Kingdom, &[]);
        let english: Vec<&str> = kingdoms.iter().map(|o| o.english.as_str()).collect();
        assert_eq!(english, vec!["Animalia", "Plantae"]);
    }

    #[test]
    fn options_at_filters_by_ancestors() {
        let index = small_index();
        let phyla = index.options_at(Rank::Phylum, &[bt("حيوانات", "Animalia")]);
        let english: Vec<&str> = phyla.iter().map(|o| o.english.as_str()).collect();
        assert_eq!(english, vec!["Chordata", "Arthropoda"]);

        let classes = index.options_at(
            Rank::Class,
            &[bt("حيوانات", "Animalia"), bt("حبليات", "Chordata")],
        );
        let english: Vec<&str> = classes.iter().map(|o| o.english.as_str()).collect();
        assert_eq!(english, vec!["Mammalia", "Aves"]);
    }

    #[test]
    fn options_at_nonexistent_ancestor_is_empty() {
        let index = small_index();
        let phyla = index.options_at(Rank::Phylum, &[bt("فطريات", "Fungi")]);
        assert!(phyla.is_empty());
    }

    #[test]
    fn options_dedup_is_english_keyed() {
        // Same English key with differing Arabic text: first wins.
        let mut records = vec![
            record(
                [
                    ("حيوانات", "Animalia"),
                    ("حبليات", "Chordata"),
                    ("ثدييات", "Mammalia"),
                    ("لواحم", "Carnivora"),
                    ("سنوريات", "Felidae"),
                    ("نمور", "Panthera"),
                ],
                "A",
            ),
        ];
        let mut dup = records[0].clone();
        dup.kingdom = bt("مملكة الحيوانات", "Animalia");
        records.push(dup);
        let index = TaxonomyIndex::new(records);

        let kingdoms = index.options_at(Rank::Kingdom, &[]);
        assert_eq!(kingdoms.len(), 1);
        assert_eq!(kingdoms[0].arabic, "حيوانات");
    }

    #[test]
    fn records_matching_wildcards_unset_ranks() {
        let index = small_index();
        let mut selections: Selections = Default::default();
        assert_eq!(index.records_matching(&selections).len(), 4);

        selections[Rank::Kingdom.index()] = Some(bt("حيوانات", "Animalia"));
        assert_eq!(index.records_matching(&selections).len(), 3);

        selections[Rank::Phylum.index()] = Some(bt("حبليات", "Chordata"));
        let matched = index.records_matching(&selections);
        assert_eq!(matched.len(), 2);
        // Dataset order preserved
        assert_eq!(matched[0].species.english, "Arabian Leopard");
        assert_eq!(matched[1].species.english, "Saker Falcon");
    }

    #[test]
    fn empty_dataset_yields_empty_everything() {
        let index = TaxonomyIndex::default();
        assert!(index.options_at(Rank::Kingdom, &[]).is_empty());
        assert!(index.records_matching(&Default::default()).is_empty());
    }
}
