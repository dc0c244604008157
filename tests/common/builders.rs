//! Test builders — ergonomic constructors for taxonomy records and species.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. Unset ranks fall back to a generic placeholder lineage so
//! a test only has to spell out the ranks it actually cares about.

use tasnif_core::{BilingualText, LocalNames, RegionalName, Species, TaxonomyRecord};

/// Shorthand bilingual value.
pub fn bt(arabic: &str, english: &str) -> BilingualText {
    BilingualText::new(arabic, english)
}

/// Bilingual value whose Arabic side is derived from the English one. Tests
/// that only assert on English keys use this to cut fixture noise.
pub fn bte(english: &str) -> BilingualText {
    BilingualText::new(&format!("ع-{english}"), english)
}

// ---------------------------------------------------------------------------
// SpeciesBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Species`] test fixtures.
///
/// # Example
///
/// ```rust
/// let species = SpeciesBuilder::new("المها العربي", "Arabian Oryx")
///     .description("ظبي صحراوي", "A desert antelope")
///     .local_english(&["White Oryx"])
///     .build();
/// ```
pub struct SpeciesBuilder {
    species: Species,
}

impl SpeciesBuilder {
    pub fn new(arabic: &str, english: &str) -> Self {
        Self {
            species: Species {
                arabic: arabic.to_string(),
                english: english.to_string(),
                description: bt("وصف", "description"),
                habitat: bt("موطن", "habitat"),
                local_names: None,
                references: vec![],
                media: None,
            },
        }
    }

    pub fn description(mut self, arabic: &str, english: &str) -> Self {
        self.species.description = bt(arabic, english);
        self
    }

    pub fn habitat(mut self, arabic: &str, english: &str) -> Self {
        self.species.habitat = bt(arabic, english);
        self
    }

    pub fn local_arabic(mut self, names: &[&str]) -> Self {
        self.local_names().arabic = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn local_english(mut self, names: &[&str]) -> Self {
        self.local_names().english = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn regional(mut self, name: &str, region: &str) -> Self {
        self.local_names().regional.push(RegionalName {
            name: name.to_string(),
            region: region.to_string(),
        });
        self
    }

    fn local_names(&mut self) -> &mut LocalNames {
        self.species.local_names.get_or_insert_with(LocalNames::default)
    }

    pub fn build(self) -> Species {
        self.species
    }
}

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`TaxonomyRecord`] test fixtures.
///
/// Every rank defaults to a placeholder so tests can set only the ranks
/// under test.
pub struct RecordBuilder {
    record: TaxonomyRecord,
}

impl RecordBuilder {
    pub fn new(species: Species) -> Self {
        Self {
            record: TaxonomyRecord {
                kingdom: bte("Animalia"),
                phylum: bte("Chordata"),
                class: bte("Mammalia"),
                order: bte("Carnivora"),
                family: bte("Felidae"),
                genus: bte("Panthera"),
                species,
            },
        }
    }

    /// Convenience: a record named only by its English species name.
    pub fn named(english: &str) -> Self {
        Self::new(SpeciesBuilder::new(&format!("ع-{english}"), english).build())
    }

    pub fn kingdom(mut self, value: BilingualText) -> Self {
        self.record.kingdom = value;
        self
    }

    pub fn phylum(mut self, value: BilingualText) -> Self {
        self.record.phylum = value;
        self
    }

    pub fn class(mut self, value: BilingualText) -> Self {
        self.record.class = value;
        self
    }

    pub fn order(mut self, value: BilingualText) -> Self {
        self.record.order = value;
        self
    }

    pub fn family(mut self, value: BilingualText) -> Self {
        self.record.family = value;
        self
    }

    pub fn genus(mut self, value: BilingualText) -> Self {
        self.record.genus = value;
        self
    }

    /// Set the whole lineage from English names in rank order.
    pub fn lineage(mut self, english: [&str; 6]) -> Self {
        self.record.kingdom = bte(english[0]);
        self.record.phylum = bte(english[1]);
        self.record.class = bte(english[2]);
        self.record.order = bte(english[3]);
        self.record.family = bte(english[4]);
        self.record.genus = bte(english[5]);
        self
    }

    pub fn build(self) -> TaxonomyRecord {
        self.record
    }
}
