//! Ratatui widgets for the tasnif TUI.

pub mod help;
pub mod option_list;
pub mod rank_panel;
pub mod search_bar;
pub mod search_results;
pub mod species_grid;

use ratatui::text::{Line, Span};
use ratatui::style::Style;
use tasnif_core::highlight;

/// Build a styled line from `text`, wrapping every case-insensitive
/// occurrence of `query` in the highlight style. Used by the results
/// dropdown to mark the matched spans of each hit.
pub(crate) fn highlighted_line(
    text: &str,
    query: &str,
    base: Style,
    matched: Style,
) -> Line<'static> {
    let spans: Vec<Span<'static>> = highlight(text, query)
        .into_iter()
        .map(|s| {
            let style = if s.matched { matched } else { base };
            Span::styled(s.text, style)
        })
        .collect();
    Line::from(spans)
}
