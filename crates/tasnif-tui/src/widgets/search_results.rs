//! Search results dropdown — overlay anchored above the search bar.
//!
//! Shows at most the top five ranked hits. Each row carries the bilingual
//! species name with matched substrings highlighted, and the Arabic
//! hierarchy breadcrumb underneath so the user can see where the hit sits
//! before jumping to it. `Enter` replays the hit's path through the
//! cascade and focuses the species card (shell-handled).

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::highlighted_line;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use tasnif_core::SearchHit;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchResultsState {
    /// Ranked hits from the last completed search.
    pub hits: Vec<SearchHit>,
    /// Cursor over the hit list.
    pub cursor: usize,
    /// The normalized query the hits were computed for, used to drive
    /// highlighting so it never drifts from the result set.
    pub query: String,
    /// Whether the dropdown is visible.
    pub open: bool,
}

impl SearchResultsState {
    /// Replace the result set after a search completes.
    pub fn show(&mut self, query: String, hits: Vec<SearchHit>) {
        self.hits = hits;
        self.query = query;
        self.cursor = 0;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hits.clear();
        self.cursor = 0;
    }

    /// The hit under the cursor, if any.
    pub fn selected(&self) -> Option<&SearchHit> {
        self.hits.get(self.cursor)
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < self.hits.len() {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchResults<'a> {
    state: &'a SearchResultsState,
    theme: &'a Theme,
}

impl<'a> SearchResults<'a> {
    pub fn new(state: &'a SearchResultsState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Height the dropdown wants: two lines per hit plus borders, or the
    /// single no-results row.
    pub fn desired_height(&self) -> u16 {
        let rows = if self.state.hits.is_empty() {
            1
        } else {
            self.state.hits.len() * 2
        };
        rows as u16 + 2
    }
}

impl Widget for SearchResults<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.open {
            return;
        }
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" نتائج | Results ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.hits.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "لا نتائج | no results",
                self.theme.rank_placeholder,
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(self.state.hits.len() * 2);
        for (index, hit) in self.state.hits.iter().enumerate() {
            let under_cursor = index == self.state.cursor;
            let marker = if under_cursor { "▸ " } else { "  " };

            let name = format!("{} | {}", hit.species.arabic, hit.species.english);
            let base = if under_cursor {
                self.theme.rank_cursor
            } else {
                self.theme.name_arabic
            };
            let mut name_line =
                highlighted_line(&name, &self.state.query, base, self.theme.search_highlight);
            name_line.spans.insert(0, Span::raw(marker));
            lines.push(name_line);

            lines.push(Line::from(Span::styled(
                format!("    {}", hit.path.arabic_breadcrumb()),
                self.theme.search_breadcrumb,
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
