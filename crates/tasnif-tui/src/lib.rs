//! tasnif TUI — ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use tasnif_core::{config::Config, TaxonomyRecord};

/// Start the TUI over a loaded dataset.
pub fn run(records: Vec<TaxonomyRecord>, config: Config, theme: theme::Theme) -> anyhow::Result<()> {
    App::new(records, config, theme).run()
}
