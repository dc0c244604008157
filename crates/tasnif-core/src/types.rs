//! Core types for tasnif-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the paired [`BilingualText`] value, the fixed [`Rank`] ladder,
//! and the denormalised [`TaxonomyRecord`] rows the dataset is made of.
//!
//! Field names carry `#[serde(rename)]` attributes matching the PascalCase
//! keys of the dataset document; the Rust side uses snake_case throughout.

use serde::Deserialize;

/// Arabic display labels for each taxonomic rank, keyed by the rank's
/// English name. Used when composing classification strings.
static RANK_LABELS_AR: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Kingdom" => "مملكة",
    "Phylum" => "شعبة",
    "Class" => "صف",
    "Order" => "رتبة",
    "Family" => "فصيلة",
    "Genus" => "جنس",
};

// ---------------------------------------------------------------------------
// BilingualText
// ---------------------------------------------------------------------------

/// A paired Arabic/English string value.
///
/// Every taxonomic rank value and every descriptive field in the dataset is
/// bilingual. For filtering purposes two values are the same taxon when
/// their **English** fields are equal; that is the dataset's canonical key.
/// The Arabic text is display-only and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BilingualText {
    #[serde(rename = "Arabic")]
    pub arabic: String,
    #[serde(rename = "English")]
    pub english: String,
}

impl BilingualText {
    pub fn new(arabic: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            arabic: arabic.into(),
            english: english.into(),
        }
    }

    /// Filtering identity: English-field equality.
    ///
    /// Well-formed data carries consistent Arabic text for a given English
    /// key; that is an input invariant, not something we enforce.
    pub fn same_taxon(&self, other: &BilingualText) -> bool {
        self.english == other.english
    }
}

impl std::fmt::Display for BilingualText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.arabic, self.english)
    }
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// One of the six fixed taxonomic ranks a user can select.
///
/// Species is the terminal payload of a record, not a selectable rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
}

impl Rank {
    /// All ranks in cascade order, shallowest first.
    pub const ALL: [Rank; 6] = [
        Rank::Kingdom,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
    ];

    /// Number of selectable ranks.
    pub const COUNT: usize = 6;

    /// Zero-based depth of this rank (Kingdom = 0 … Genus = 5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rank at the given depth, or `None` when out of range. A caller
    /// holding an index that cannot convert has a logic bug; there is no
    /// recoverable meaning for rank 6+.
    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::ALL.get(index).copied()
    }

    /// The next-deeper rank, or `None` for Genus.
    pub fn next(self) -> Option<Rank> {
        Rank::from_index(self.index() + 1)
    }

    /// English rank name as it appears in dataset keys and UI labels.
    pub fn english_label(self) -> &'static str {
        match self {
            Rank::Kingdom => "Kingdom",
            Rank::Phylum => "Phylum",
            Rank::Class => "Class",
            Rank::Order => "Order",
            Rank::Family => "Family",
            Rank::Genus => "Genus",
        }
    }

    /// Arabic rank name from the static label map.
    pub fn arabic_label(self) -> &'static str {
        RANK_LABELS_AR
            .get(self.english_label())
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_label())
    }
}

// ---------------------------------------------------------------------------
// Species payload types
// ---------------------------------------------------------------------------

/// Local and regional names attached to a species.
///
/// Any sub-list may be absent in the document; absence means "no local
/// names of that kind", never an error, so every list defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LocalNames {
    #[serde(rename = "Arabic", default)]
    pub arabic: Vec<String>,
    #[serde(rename = "English", default)]
    pub english: Vec<String>,
    #[serde(rename = "Regional", default)]
    pub regional: Vec<RegionalName>,
}

impl LocalNames {
    /// True when every sub-list is empty.
    pub fn is_empty(&self) -> bool {
        self.arabic.is_empty() && self.english.is_empty() && self.regional.is_empty()
    }

    /// One-line display summary: `(قرقور - وضيحي) (Whitey) (Maha (Najd))`.
    ///
    /// Empty groups are skipped; an entirely empty value renders as "".
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.arabic.is_empty() {
            parts.push(format!("({})", self.arabic.join(" - ")));
        }
        if !self.english.is_empty() {
            parts.push(format!("({})", self.english.join(" - ")));
        }
        if !self.regional.is_empty() {
            let regional: Vec<String> = self
                .regional
                .iter()
                .map(|r| format!("{} ({})", r.name, r.region))
                .collect();
            parts.push(format!("({})", regional.join(" - ")));
        }
        parts.join(" ")
    }
}

/// A local name tied to the region that uses it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionalName {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Region")]
    pub region: String,
}

/// Kind of an external reference link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReferenceKind {
    #[serde(rename = "reference")]
    Reference,
    #[serde(rename = "image")]
    Image,
}

/// An external citation or image link attached to a species.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(rename = "Type")]
    pub kind: ReferenceKind,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// A single image or video with a bilingual caption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Caption")]
    pub caption: BilingualText,
}

/// Optional media attachments; either list may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Media {
    #[serde(rename = "Images", default)]
    pub images: Vec<MediaItem>,
    #[serde(rename = "Videos", default)]
    pub videos: Vec<MediaItem>,
}

/// The terminal payload of a taxonomy record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    #[serde(rename = "Arabic")]
    pub arabic: String,
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "Description")]
    pub description: BilingualText,
    #[serde(rename = "Habitat")]
    pub habitat: BilingualText,
    #[serde(rename = "LocalNames", default)]
    pub local_names: Option<LocalNames>,
    #[serde(rename = "References")]
    pub references: Vec<Reference>,
    #[serde(rename = "Media", default)]
    pub media: Option<Media>,
}

// ---------------------------------------------------------------------------
// TaxonomyRecord
// ---------------------------------------------------------------------------

/// One row of the flat denormalised dataset: six rank values plus the
/// embedded species. Together they form one fully-specified classification
/// path; a species may recur under an identical ancestor path but never
/// across different paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonomyRecord {
    #[serde(rename = "Kingdom")]
    pub kingdom: BilingualText,
    #[serde(rename = "Phylum")]
    pub phylum: BilingualText,
    #[serde(rename = "Class")]
    pub class: BilingualText,
    #[serde(rename = "Order")]
    pub order: BilingualText,
    #[serde(rename = "Family")]
    pub family: BilingualText,
    #[serde(rename = "Genus")]
    pub genus: BilingualText,
    #[serde(rename = "Species")]
    pub species: Species,
}

impl TaxonomyRecord {
    /// The bilingual value at the given rank.
    pub fn rank_value(&self, rank: Rank) -> &BilingualText {
        match rank {
            Rank::Kingdom => &self.kingdom,
            Rank::Phylum => &self.phylum,
            Rank::Class => &self.class,
            Rank::Order => &self.order,
            Rank::Family => &self.family,
            Rank::Genus => &self.genus,
        }
    }

    /// The record's full six-rank hierarchy path.
    pub fn path(&self) -> HierarchyPath {
        HierarchyPath([
            self.kingdom.clone(),
            self.phylum.clone(),
            self.class.clone(),
            self.order.clone(),
            self.family.clone(),
            self.genus.clone(),
        ])
    }

    /// Bilingual classification string for display:
    /// `مملكة حيوانات - شعبة حبليات - …` / `Kingdom Animalia - Phylum Chordata - …`
    pub fn classification(&self) -> BilingualText {
        let arabic: Vec<String> = Rank::ALL
            .iter()
            .map(|&r| format!("{} {}", r.arabic_label(), self.rank_value(r).arabic))
            .collect();
        let english: Vec<String> = Rank::ALL
            .iter()
            .map(|&r| format!("{} {}", r.english_label(), self.rank_value(r).english))
            .collect();
        BilingualText::new(arabic.join(" - "), english.join(" - "))
    }
}

// ---------------------------------------------------------------------------
// HierarchyPath
// ---------------------------------------------------------------------------

/// The ordered 6-tuple of rank values identifying a record's position in
/// the taxonomy. Search hits carry one so a collaborator can replay the
/// cascade selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyPath(pub [BilingualText; 6]);

impl HierarchyPath {
    /// The value at the given rank.
    pub fn value(&self, rank: Rank) -> &BilingualText {
        &self.0[rank.index()]
    }

    /// Iterate `(rank, value)` pairs shallowest-first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &BilingualText)> {
        Rank::ALL.into_iter().zip(self.0.iter())
    }

    /// Arabic breadcrumb shown under each search hit:
    /// `حيوانات > حبليات > ثدييات > …`
    pub fn arabic_breadcrumb(&self) -> String {
        self.0
            .iter()
            .map(|v| v.arabic.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
