//! UI rendering functions for the buzz generator TUI
//!
//! This module contains the rendering logic for the form, the results pane,
//! the history sidebar and the language dropdown overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::models::App;

// Module declarations
mod components;
mod form_view;
mod header_footer;
mod results_view;
mod sidebar;

// Re-export public functions
pub use components::{render_dropdown, render_error_banner, spinner_char, status_style};
pub use form_view::render_form;
pub use header_footer::{render_footer, render_header};
pub use results_view::render_results;
pub use sidebar::render_history_sidebar;

/// Width of the history sidebar
const SIDEBAR_WIDTH: u16 = 36;

/// Height of the form block (key, announcement, language/generate row, status)
const FORM_HEIGHT: u16 = 15;

/// Main UI rendering function - orchestrates all view rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    // Sidebar + main column
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_history_sidebar(f, body[0], app);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
        .split(body[1]);

    let language_area = render_form(f, main[0], app);
    render_results(f, main[1], app);

    render_footer(f, chunks[2], app);

    // Dropdown overlay
    if app.show_dropdown {
        render_dropdown(f, language_area, app);
    }
}
