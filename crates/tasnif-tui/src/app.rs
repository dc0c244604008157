//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Search runs debounced:
//! each keystroke in the search bar re-arms a deadline, and the query is
//! executed on the first poll tick past it.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        option_list::{OptionList, OptionListState},
        rank_panel::{RankPanel, RankPanelState},
        search_bar::{SearchBar, SearchBarState},
        search_results::{SearchResults, SearchResultsState},
        species_grid::{SpeciesGrid, SpeciesGridState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tasnif_core::{
    config::Config, search, CascadeController, SearchHit, TaxonomyIndex, TaxonomyRecord,
};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ranks,
    Grid,
    Search,
}

/// A search armed by a keystroke, waiting for its deadline.
struct PendingSearch {
    query: String,
    due: Instant,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub controller: CascadeController,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub ranks: RankPanelState,
    pub grid: SpeciesGridState,
    pub search_bar: SearchBarState,
    pub results: SearchResultsState,
    /// Option popup for the rank under the cursor, when open.
    pub option_popup: Option<OptionListState>,
    pub show_help: bool,
    pub quit: bool,
    pending: Option<PendingSearch>,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(records: Vec<TaxonomyRecord>, config: Config, theme: Theme) -> Self {
        let controller = CascadeController::new(TaxonomyIndex::new(records));

        let state = AppState {
            controller,
            focus: Focus::Ranks,
            theme,
            config,
            ranks: RankPanelState::default(),
            grid: SpeciesGridState::default(),
            search_bar: SearchBarState::default(),
            results: SearchResultsState::default(),
            option_popup: None,
            show_help: false,
            quit: false,
            pending: None,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.fire_due_search();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when the search bar is focused
                        let app_event = if self.state.focus == Focus::Search {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Run the armed search once its deadline has passed.
    fn fire_due_search(&mut self) {
        let due = self
            .state
            .pending
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.due);
        if !due {
            return;
        }
        let pending = match self.state.pending.take() {
            Some(p) => p,
            None => return,
        };
        let hits = search(&pending.query, self.state.controller.index());
        tracing::debug!(query = %pending.query, hits = hits.len(), "search fired");
        self.state.results.show(pending.query, hits);
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Option popup intercepts all events.
        if let Some(popup) = s.option_popup.as_mut() {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("option popup cancelled");
                    s.option_popup = None;
                }
                AppEvent::Enter => {
                    let rank = popup.rank;
                    let chosen = popup.chosen();
                    tracing::debug!(rank = rank.english_label(), chosen = ?chosen, "rank selected");
                    s.option_popup = None;
                    s.controller.on_rank_changed(rank, chosen);
                    s.grid.sync(s.controller.species_indices().len());
                }
                AppEvent::Quit => s.quit = true,
                other => popup.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::Search => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape => match s.focus {
                Focus::Search => {
                    tracing::debug!("focus: Search -> Ranks");
                    s.results.close();
                    s.pending = None;
                    s.focus = Focus::Ranks;
                }
                _ if s.results.open => s.results.close(),
                _ => {}
            },

            // Tab-cycle focus: Ranks → Grid → Search → Ranks
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Ranks => Focus::Grid,
                    Focus::Grid => Focus::Search,
                    Focus::Search => Focus::Ranks,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                s.focus = Focus::Search;
            }

            // Reset all selections regardless of which pane is focused
            AppEvent::Char('R') if s.focus != Focus::Search => {
                tracing::debug!("cascade reset");
                s.controller.reset();
                s.grid.sync(0);
                s.ranks.cursor = 0;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Ranks => handle_ranks(s, other),
                Focus::Grid => s.grid.handle(&other),
                Focus::Search => handle_search(s, other),
            },
        }
    }
}

/// Key handling for the rank panel: vertical navigation plus the
/// popup-open and unset actions that need controller access.
fn handle_ranks(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Enter => {
            let rank = s.ranks.focused_rank();
            let rank_state = s.controller.rank_state(rank);
            if !rank_state.enabled || rank_state.options.is_empty() {
                return;
            }
            let options = rank_state.options.clone();
            tracing::debug!(rank = rank.english_label(), options = options.len(), "option popup opened");
            s.option_popup = Some(OptionListState::open(
                rank,
                options,
                s.controller.selection(rank),
            ));
        }
        AppEvent::Backspace => {
            let rank = s.ranks.focused_rank();
            if s.controller.selection(rank).is_some() {
                tracing::debug!(rank = rank.english_label(), "rank unset");
                s.controller.on_rank_changed(rank, None);
                s.grid.sync(s.controller.species_indices().len());
            }
        }
        other => s.ranks.handle(&other),
    }
}

/// Key handling while the search bar is focused. Edits re-arm the
/// debounce deadline; Enter either jumps to the highlighted hit or runs
/// the query immediately.
fn handle_search(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Enter => {
            if s.results.open {
                if let Some(hit) = s.results.selected().cloned() {
                    jump_to_hit(s, &hit);
                }
            } else {
                let query = s.search_bar.normalized();
                if query.chars().count() >= s.config.search.min_query_chars {
                    let hits = search(&query, s.controller.index());
                    s.results.show(query, hits);
                }
            }
        }
        // Up/Down drive the dropdown cursor while it is open; Left/Right
        // stay with the text cursor.
        AppEvent::Nav(Direction::Up | Direction::Down) if s.results.open => {
            s.results.handle(&event)
        }
        other => {
            if s.search_bar.handle(&other) {
                arm_search(s);
            }
        }
    }
}

/// Arm (or cancel) the debounced search after the input changed.
fn arm_search(s: &mut AppState) {
    let query = s.search_bar.normalized();
    if query.chars().count() < s.config.search.min_query_chars {
        s.pending = None;
        s.results.close();
        return;
    }
    let due = Instant::now() + Duration::from_millis(s.config.search.debounce_ms);
    s.pending = Some(PendingSearch { query, due });
}

/// Replay a hit's hierarchy through the cascade, then move the species
/// grid onto the matching card.
fn jump_to_hit(s: &mut AppState, hit: &SearchHit) {
    s.controller.apply_path(&hit.path);
    let species = s.controller.species();
    let target = species.iter().position(|record| {
        record.species.arabic == hit.species.arabic || record.species.english == hit.species.english
    });
    s.grid.sync(species.len());
    if let Some(index) = target {
        tracing::debug!(species = %hit.species.english, card = index, "search jump");
        s.grid.focus_card(index);
    }
    s.results.close();
    s.pending = None;
    s.search_bar.clear();
    s.focus = Focus::Grid;
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: body | 3-line search bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    // Horizontal body split: rank panel | species grid
    let pct = state.config.ui.rank_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[0]);

    frame.render_widget(
        RankPanel::new(
            &state.ranks,
            &state.controller,
            state.focus == Focus::Ranks,
            &state.theme,
        ),
        horiz[0],
    );

    let species = state.controller.species();
    frame.render_widget(
        SpeciesGrid::new(
            &state.grid,
            &species,
            state.focus == Focus::Grid,
            &state.theme,
            &state.config.ui,
        ),
        horiz[1],
    );

    let search_bar = SearchBar::new(
        &state.search_bar,
        state.focus == Focus::Search,
        &state.theme,
    );
    let cursor = search_bar.cursor_position(vert[1]);
    frame.render_widget(search_bar, vert[1]);

    // Results dropdown sits just above the search bar, over the body.
    if state.results.open {
        let results = SearchResults::new(&state.results, &state.theme);
        let height = results.desired_height().min(vert[0].height);
        let dropdown = Rect {
            x: area.x,
            y: vert[1].y.saturating_sub(height),
            width: area.width,
            height,
        };
        frame.render_widget(results, dropdown);
    }

    if let Some(popup) = &state.option_popup {
        frame.render_widget(OptionList::new(popup, &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if state.focus == Focus::Search && state.option_popup.is_none() && !state.show_help {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
