//! Species grid — the card pane showing the terminal result set.
//!
//! Populated only when all six ranks are selected; otherwise it renders a
//! bilingual hint. Each card shows the species names and local-names
//! summary, and expands in place (Enter) to the description, habitat,
//! classification string, references, and media captions. Optional blocks
//! that are absent are simply not rendered.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Move the card cursor (scrolls as needed) |
//! | `PageUp` / `Ctrl+u`, `PageDown` / `Ctrl+d` | Jump several cards |
//! | `Enter` | Toggle the focused card's details |

use std::cell::Cell;
use std::collections::HashSet;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tasnif_core::{config::UiConfig, ReferenceKind, TaxonomyRecord};

const PAGE_STEP: usize = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SpeciesGridState {
    /// Number of cards currently in the result set.
    count: usize,
    /// Index of the focused card.
    pub cursor: usize,
    /// Index of the first visible card.
    pub scroll: usize,
    /// Cards whose detail section is open.
    pub expanded: HashSet<usize>,
    /// Card flagged after a search-result jump, drawn in the flash style.
    pub flash: Option<usize>,
    /// Cards that fit in the pane on the last render, for cursor-aware
    /// scrolling in `handle()`.
    last_fit: Cell<usize>,
}

impl SpeciesGridState {
    /// Reconcile with a fresh result set. Any change in the set discards
    /// cursor, scroll, expansion, and flash state; the old indices would
    /// point at different cards.
    pub fn sync(&mut self, count: usize) {
        if count != self.count {
            *self = Self {
                count,
                ..Self::default()
            };
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Jump the cursor to `index` (a search-result target), scrolling it
    /// into view and flagging the card.
    pub fn focus_card(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.cursor = index;
        self.scroll = index.saturating_sub(self.fit() / 2);
        self.flash = Some(index);
        self.expanded.insert(index);
    }

    pub fn handle(&mut self, event: &AppEvent) {
        if self.count == 0 {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => self.move_cursor_by(-1),
            AppEvent::Nav(Direction::Down) => self.move_cursor_by(1),
            AppEvent::ScrollUp => self.move_cursor_by(-(PAGE_STEP as isize)),
            AppEvent::ScrollDown => self.move_cursor_by(PAGE_STEP as isize),
            AppEvent::Enter => {
                if !self.expanded.remove(&self.cursor) {
                    self.expanded.insert(self.cursor);
                }
            }
            _ => {}
        }
    }

    fn move_cursor_by(&mut self, delta: isize) {
        let max = self.count.saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
        self.flash = None;
        // Keep the cursor inside the window seen on the last render.
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.fit() {
            self.scroll = self.cursor + 1 - self.fit();
        }
    }

    fn fit(&self) -> usize {
        self.last_fit.get().max(1)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SpeciesGrid<'a> {
    state: &'a SpeciesGridState,
    records: &'a [&'a TaxonomyRecord],
    focused: bool,
    theme: &'a Theme,
    ui: &'a UiConfig,
}

impl<'a> SpeciesGrid<'a> {
    pub fn new(
        state: &'a SpeciesGridState,
        records: &'a [&'a TaxonomyRecord],
        focused: bool,
        theme: &'a Theme,
        ui: &'a UiConfig,
    ) -> Self {
        Self {
            state,
            records,
            focused,
            theme,
            ui,
        }
    }

    fn card_lines(&self, index: usize, record: &TaxonomyRecord) -> Vec<Line<'static>> {
        let species = &record.species;
        let under_cursor = self.focused && index == self.state.cursor;
        let flashed = self.state.flash == Some(index);

        let marker = if under_cursor { "▸ " } else { "  " };
        let name_style = if flashed {
            self.theme.card_flash
        } else {
            self.theme.name_arabic
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(species.arabic.clone(), name_style),
            ]),
            Line::from(Span::styled(
                format!("  {}", species.english),
                self.theme.name_english,
            )),
        ];

        if let Some(names) = species.local_names.as_ref().filter(|n| !n.is_empty()) {
            lines.push(Line::from(Span::styled(
                format!("  {}", names.summary()),
                self.theme.search_breadcrumb,
            )));
        }

        if self.state.expanded.contains(&index) {
            let detail = self.theme.card_detail;
            lines.push(Line::from(Span::styled(
                format!("  {}", species.description.arabic),
                detail,
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", species.description.english),
                detail,
            )));
            lines.push(Line::from(Span::styled(
                format!("  الموطن | Habitat: {} | {}", species.habitat.arabic, species.habitat.english),
                detail,
            )));
            if self.ui.show_classification {
                lines.push(Line::from(Span::styled(
                    format!("  {}", record.classification().arabic),
                    detail,
                )));
            }
            if self.ui.show_references {
                for reference in &species.references {
                    let glyph = match reference.kind {
                        ReferenceKind::Reference => "📖",
                        ReferenceKind::Image => "🖼",
                    };
                    lines.push(Line::from(Span::styled(
                        format!("  {glyph} {} — {}", reference.title, reference.url),
                        detail,
                    )));
                }
                if let Some(media) = &species.media {
                    for image in &media.images {
                        lines.push(Line::from(Span::styled(
                            format!("  🖼 {} | {}", image.caption.arabic, image.caption.english),
                            detail,
                        )));
                    }
                    for video in &media.videos {
                        lines.push(Line::from(Span::styled(
                            format!("  ▶ {} | {}", video.caption.arabic, video.caption.english),
                            detail,
                        )));
                    }
                }
            }
        }

        lines.push(Line::raw(""));
        lines
    }
}

impl Widget for SpeciesGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = if self.records.is_empty() {
            " الأنواع | Species ".to_string()
        } else {
            format!(" الأنواع | Species ({}) ", self.records.len())
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "اختر جميع المستويات لعرض الأنواع | select all ranks to list species",
                self.theme.rank_placeholder,
            )))
            .render(inner, buf);
            self.state.last_fit.set(1);
            return;
        }

        // Fill the pane card by card from the scroll position.
        let mut lines: Vec<Line> = Vec::new();
        let mut fit = 0usize;
        for (index, record) in self.records.iter().enumerate().skip(self.state.scroll) {
            let card = self.card_lines(index, record);
            if !lines.is_empty() && lines.len() + card.len() > inner.height as usize {
                break;
            }
            lines.extend(card);
            fit += 1;
        }
        self.state.last_fit.set(fit);

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
