//! Colour theme for the tasnif TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files
//! on disk. Call [`Theme::load_default`] at startup and pass the result
//! through the application as a shared reference.
//!
//! # Rank colours
//!
//! Each of the six taxonomic ranks gets a colour from an ordered palette
//! indexed by depth, so Kingdom is always the first palette colour and
//! Genus the sixth, in every session.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tasnif_core::Rank;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const DESERT_THEME_SRC: &str = include_str!("themes/desert.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawNames {
    arabic: RawStyle,
    english: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawRanks {
    selected: RawStyle,
    placeholder: RawStyle,
    disabled: RawStyle,
    cursor: RawStyle,
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
    breadcrumb: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCards {
    detail: RawStyle,
    flash: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    names: RawNames,
    ranks: RawRanks,
    borders: RawBorders,
    search: RawSearch,
    cards: RawCards,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// Load once at startup with [`Theme::load_default`] (or
/// [`Theme::by_name`]) and pass as a shared reference throughout the TUI.
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for Arabic name lines.
    pub name_arabic: Style,
    /// Style for English name lines.
    pub name_english: Style,

    /// A chosen rank value in the rank panel.
    pub rank_selected: Style,
    /// The "اختر… | Select…" placeholder on an enabled, unset rank.
    pub rank_placeholder: Style,
    /// A disabled rank row.
    pub rank_disabled: Style,
    /// The rank row (or popup option) under the cursor.
    pub rank_cursor: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Inline highlight applied to matched search spans.
    pub search_highlight: Style,
    /// The Arabic breadcrumb path line under each search hit.
    pub search_breadcrumb: Style,

    /// Expanded card detail text (description, habitat, classification).
    pub card_detail: Style,
    /// Card selected via a search hit, for the scroll-and-flag effect.
    pub card_flash: Style,

    /// Ordered colour palette indexed by rank depth.
    rank_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The default theme is
    /// embedded at compile time via `include_str!`, so this should never
    /// happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded desert theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_desert() -> Self {
        Self::from_toml_str(DESERT_THEME_SRC).expect("embedded desert theme must be valid TOML")
    }

    /// Resolve a theme by user-supplied name, falling back to the default
    /// for unknown names.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "desert" => Self::load_desert(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be
    /// forward-compatible with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name_arabic: raw.names.arabic.into_style(),
            name_english: raw.names.english.into_style(),
            rank_selected: raw.ranks.selected.into_style(),
            rank_placeholder: raw.ranks.placeholder.into_style(),
            rank_disabled: raw.ranks.disabled.into_style(),
            rank_cursor: raw.ranks.cursor.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            search_breadcrumb: raw.search.breadcrumb.into_style(),
            card_detail: raw.cards.detail.into_style(),
            card_flash: raw.cards.flash.into_style(),
            rank_palette: raw
                .ranks
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Return the label [`Style`] for a rank, from the depth-indexed
    /// palette. Kingdom always maps to the first palette colour.
    pub fn rank_style(&self, rank: Rank) -> Style {
        if self.rank_palette.is_empty() {
            return Style::default();
        }
        let idx = rank.index() % self.rank_palette.len();
        Style::default().fg(self.rank_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
