//! Option popup — centred overlay listing the valid values for one rank.
//!
//! Opened with `Enter` on an enabled rank row. The first entry is always
//! the unset placeholder; choosing it clears the rank (and everything
//! below it, per the cascade rules). The option list itself comes from
//! the controller and is already sorted.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::rank_panel::PLACEHOLDER;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use tasnif_core::{BilingualText, Rank};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct OptionListState {
    /// The rank whose options are listed.
    pub rank: Rank,
    /// Sorted options, as handed out by the controller.
    pub options: Vec<BilingualText>,
    /// Cursor over the list, where 0 is the unset entry and `i + 1`
    /// addresses `options[i]`.
    pub cursor: usize,
}

impl OptionListState {
    /// Open a popup for `rank`, with the cursor on the current selection
    /// when there is one.
    pub fn open(rank: Rank, options: Vec<BilingualText>, current: Option<&BilingualText>) -> Self {
        let cursor = current
            .and_then(|sel| options.iter().position(|o| o.same_taxon(sel)))
            .map(|i| i + 1)
            .unwrap_or(0);
        Self {
            rank,
            options,
            cursor,
        }
    }

    /// Total rows including the unset entry.
    fn len(&self) -> usize {
        self.options.len() + 1
    }

    /// The value the cursor stands on: `None` is the unset entry.
    pub fn chosen(&self) -> Option<BilingualText> {
        if self.cursor == 0 {
            None
        } else {
            self.options.get(self.cursor - 1).cloned()
        }
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < self.len() {
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

pub struct OptionList<'a> {
    state: &'a OptionListState,
    theme: &'a Theme,
}

impl<'a> OptionList<'a> {
    pub fn new(state: &'a OptionListState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for OptionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.state.len() as u16 + 2).min(area.height);
        let width = 44.min(area.width);
        let popup = centered_rect(width, height, area);
        Clear.render(popup, buf);

        let rank = self.state.rank;
        let block = Block::bordered()
            .title(format!(" {} {} ", rank.arabic_label(), rank.english_label()))
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        // Keep the cursor row inside the visible window.
        let visible = inner.height as usize;
        let skip = self.state.cursor.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = std::iter::once(Line::from(Span::styled(
            PLACEHOLDER,
            self.theme.rank_placeholder,
        )))
        .chain(
            self.state
                .options
                .iter()
                .map(|o| Line::from(o.to_string())),
        )
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, line)| {
            if i == self.state.cursor {
                line.style(self.theme.rank_cursor)
            } else {
                line
            }
        })
        .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
