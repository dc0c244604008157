//! Rank panel widget — the six cascading selectors on the left.
//!
//! Each row shows one taxonomic rank with its current selection, the
//! bilingual placeholder when the rank is enabled but unset, or a dimmed
//! row when the rank is disabled (an ancestor is missing). The panel only
//! renders controller state; all option derivation lives in
//! `tasnif_core::cascade`.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Move the cursor between rank rows |
//! | `Enter` | Open the option popup for the focused rank (shell-handled) |
//! | `Backspace` | Unset the focused rank (shell-handled) |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tasnif_core::{CascadeController, Rank};

/// Placeholder text mirroring the dataset's bilingual select prompt.
pub const PLACEHOLDER: &str = "اختر… | Select…";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RankPanelState {
    /// Index of the focused rank row (0 = Kingdom … 5 = Genus).
    pub cursor: usize,
}

impl RankPanelState {
    /// The rank currently under the cursor.
    pub fn focused_rank(&self) -> Rank {
        Rank::from_index(self.cursor).unwrap_or(Rank::Kingdom)
    }

    /// Handle a key event from the app shell. Only vertical navigation is
    /// interpreted here; Enter and Backspace need controller access and
    /// are handled by the shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < Rank::COUNT {
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

pub struct RankPanel<'a> {
    state: &'a RankPanelState,
    controller: &'a CascadeController,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RankPanel<'a> {
    pub fn new(
        state: &'a RankPanelState,
        controller: &'a CascadeController,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            controller,
            focused,
            theme,
        }
    }
}

impl Widget for RankPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(" التصنيف | Classification ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(Rank::COUNT * 2);
        for rank in Rank::ALL {
            let rank_state = self.controller.rank_state(rank);
            let under_cursor = self.focused && self.state.cursor == rank.index();

            let label = format!("{:<8}", rank.english_label());
            let label_span = Span::styled(label, self.theme.rank_style(rank));
            let arabic_span = Span::styled(
                format!("{:<8}", rank.arabic_label()),
                self.theme.rank_style(rank),
            );

            let value_span = match self.controller.selection(rank) {
                Some(value) => Span::styled(value.to_string(), self.theme.rank_selected),
                None if rank_state.enabled && rank_state.options.is_empty() => {
                    Span::styled("لا خيارات | no options", self.theme.rank_disabled)
                }
                None if rank_state.enabled => {
                    Span::styled(PLACEHOLDER, self.theme.rank_placeholder)
                }
                None => Span::styled("—", self.theme.rank_disabled),
            };

            let marker = if under_cursor { "▸ " } else { "  " };
            let mut line = Line::from(vec![
                Span::raw(marker),
                label_span,
                arabic_span,
                value_span,
            ]);
            if under_cursor {
                line = line.style(self.theme.rank_cursor);
            } else if !rank_state.enabled && self.controller.selection(rank).is_none() {
                line = line.style(self.theme.rank_disabled);
            }
            lines.push(line);
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_range() {
        let mut state = RankPanelState::default();
        state.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(state.cursor, 0);
        for _ in 0..10 {
            state.handle(&AppEvent::Nav(Direction::Down));
        }
        assert_eq!(state.cursor, Rank::COUNT - 1);
        assert_eq!(state.focused_rank(), Rank::Genus);
    }
}
