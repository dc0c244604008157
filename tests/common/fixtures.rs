//! Static datasets used across harnesses.
//!
//! The fixture lineages are chosen to exercise every interesting cascade
//! shape: a family with two genera, two phyla under one kingdom, a second
//! kingdom, and species with and without local names.

use crate::common::builders::{bte, RecordBuilder, SpeciesBuilder};
use tasnif_core::{TaxonomyIndex, TaxonomyRecord};

/// The standard Arabian wildlife fixture.
///
/// Dataset order (stable across runs, relied on for tie-breaking tests):
///
/// | # | Kingdom  | Phylum       | Family     | Genus     | Species          |
/// |---|----------|--------------|------------|-----------|------------------|
/// | 0 | Animalia | Chordata     | Bovidae    | Oryx      | Arabian Oryx     |
/// | 1 | Animalia | Chordata     | Felidae    | Panthera  | Arabian Leopard  |
/// | 2 | Animalia | Chordata     | Felidae    | Caracal   | Caracal          |
/// | 3 | Animalia | Chordata     | Falconidae | Falco     | Saker Falcon     |
/// | 4 | Animalia | Arthropoda   | Scarabaeidae | Scarabaeus | Sacred Scarab |
/// | 5 | Plantae  | Tracheophyta | Fabaceae   | Vachellia | Umbrella Thorn   |
pub fn arabian_records() -> Vec<TaxonomyRecord> {
    vec![
        RecordBuilder::new(
            SpeciesBuilder::new("المها العربي", "Arabian Oryx")
                .description("ظبي صحراوي أبيض", "A white desert antelope")
                .habitat("الصحارى الرملية", "Sand deserts")
                .local_arabic(&["الوضيحي", "بقر الوحش"])
                .local_english(&["White Oryx"])
                .regional("مهاة نجد", "نجد")
                .build(),
        )
        .lineage(["Animalia", "Chordata", "Mammalia", "Artiodactyla", "Bovidae", "Oryx"])
        .build(),
        RecordBuilder::new(
            SpeciesBuilder::new("النمر العربي", "Arabian Leopard")
                .description("سنور مرقط مهدد بالانقراض", "A critically endangered spotted cat")
                .habitat("الجبال الوعرة", "Rugged mountains")
                .build(),
        )
        .lineage(["Animalia", "Chordata", "Mammalia", "Carnivora", "Felidae", "Panthera"])
        .build(),
        RecordBuilder::new(
            SpeciesBuilder::new("الوشق", "Caracal")
                .description("سنور متوسط الحجم بأذنين معنقدتين", "A medium cat with tufted ears")
                .habitat("السهوب والجبال", "Steppe and mountains")
                .local_arabic(&["عناق الأرض"])
                .build(),
        )
        .lineage(["Animalia", "Chordata", "Mammalia", "Carnivora", "Felidae", "Caracal"])
        .build(),
        // No local names at all: exercises the absent-LocalNames path.
        RecordBuilder::new(
            SpeciesBuilder::new("صقر الغزال", "Saker Falcon")
                .description("صقر كبير يستخدم في الصيد", "A large falcon used in falconry")
                .habitat("السهوب المفتوحة", "Open steppe")
                .build(),
        )
        .lineage(["Animalia", "Chordata", "Aves", "Falconiformes", "Falconidae", "Falco"])
        .build(),
        RecordBuilder::new(
            SpeciesBuilder::new("الجعران المقدس", "Sacred Scarab")
                .description("خنفساء الروث", "A dung beetle")
                .habitat("المناطق الرملية", "Sandy areas")
                .build(),
        )
        .lineage(["Animalia", "Arthropoda", "Insecta", "Coleoptera", "Scarabaeidae", "Scarabaeus"])
        .build(),
        RecordBuilder::new(
            SpeciesBuilder::new("السمر", "Umbrella Thorn")
                .description("شجرة صحراوية مظلية", "An umbrella-shaped desert tree")
                .habitat("الأودية الصحراوية", "Desert wadis")
                .build(),
        )
        .lineage(["Plantae", "Tracheophyta", "Magnoliopsida", "Fabales", "Fabaceae", "Vachellia"])
        .build(),
    ]
}

/// The standard fixture wrapped in an index.
pub fn arabian_index() -> TaxonomyIndex {
    TaxonomyIndex::new(arabian_records())
}

/// The English lineage of one fixture record, for replay tests.
pub fn felidae_lineage() -> [tasnif_core::BilingualText; 6] {
    [
        bte("Animalia"),
        bte("Chordata"),
        bte("Mammalia"),
        bte("Carnivora"),
        bte("Felidae"),
        bte("Panthera"),
    ]
}
