//! Focus, dropdown and sidebar navigation

use crate::generator::Language;

use super::*;

/// Lines moved by PgUp/PgDn in the results pane
pub const RESULTS_PAGE: usize = 10;

impl App {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    // Language selection
    pub fn language_next(&mut self) {
        let idx = (self.language.index() + 1) % Language::ALL.len();
        self.language = Language::ALL[idx];
    }

    pub fn language_previous(&mut self) {
        let idx = (self.language.index() + Language::ALL.len() - 1) % Language::ALL.len();
        self.language = Language::ALL[idx];
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_selected = self.language.index();
        self.show_dropdown = true;
    }

    pub fn dropdown_next(&mut self) {
        if self.dropdown_selected + 1 < Language::ALL.len() {
            self.dropdown_selected += 1;
        }
    }

    pub fn dropdown_previous(&mut self) {
        self.dropdown_selected = self.dropdown_selected.saturating_sub(1);
    }

    pub fn dropdown_select(&mut self) {
        if let Some(language) = Language::ALL.get(self.dropdown_selected) {
            self.language = *language;
        }
        self.show_dropdown = false;
    }

    pub fn close_dropdown(&mut self) {
        self.show_dropdown = false;
    }

    // History sidebar
    pub fn history_next(&mut self) {
        if self.history_selected + 1 < self.history.len() {
            self.history_selected += 1;
        }
    }

    pub fn history_previous(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
    }

    /// Show the selected past run in the results pane
    pub fn open_selected_history(&mut self) {
        let selected = self
            .history
            .newest_first()
            .nth(self.history_selected)
            .map(|(number, _)| number);
        if let Some(number) = selected {
            self.show_entry(number);
        }
    }

    /// Put a run in the results pane, scrolled to the top
    pub fn show_entry(&mut self, number: usize) {
        self.displayed_entry = Some(number);
        self.results_scroll = 0;
    }

    // Results pane
    pub fn scroll_results_down(&mut self, lines: usize) {
        let max = self.results_scroll_max.get();
        self.results_scroll = self.results_scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_results_up(&mut self, lines: usize) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }
}
