//! User interface rendering.
//!
//! Pure rendering layer: every function takes the application state and a
//! frame and draws, never mutating the state.

mod charts;
mod formatters;
mod heatmap;
mod keymap_bar;
mod readout;
mod status_bar;
mod table;
mod theme;

use crate::app::{App, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    readout::draw_readout(f, chunks[0], app, &colors);

    match app.view_mode {
        ViewMode::Charts => charts::draw_charts(f, chunks[1], app, &colors),
        ViewMode::Table => table::draw_table(f, chunks[1], app, &colors),
        ViewMode::Heatmap => heatmap::draw_heatmap(f, chunks[1], app, &colors),
    }

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.view_mode, &colors);
}
