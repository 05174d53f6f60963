//! Keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

impl App {
    /// Dispatch one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        // Nothing but the key field is reachable until a key is entered
        if !self.has_api_key() {
            self.focus = FormField::ApiKey;
            self.show_dropdown = false;
            self.handle_api_key_key(key);
            return;
        }

        if self.show_dropdown {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.dropdown_next(),
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.dropdown_previous(),
                KeyCode::Enter | KeyCode::Char(' ') => self.dropdown_select(),
                KeyCode::Esc => self.close_dropdown(),
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::F(5) || (ctrl && key.code == KeyCode::Char('g')) {
            self.start_generation();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            KeyCode::Esc => {
                // The status line carries the spinner while a run is going
                if !self.is_generating() {
                    self.status = None;
                }
                return;
            }
            KeyCode::PageDown => {
                self.scroll_results_down(RESULTS_PAGE);
                return;
            }
            KeyCode::PageUp => {
                self.scroll_results_up(RESULTS_PAGE);
                return;
            }
            _ => {}
        }

        if key.code == KeyCode::Char('q') && !self.focus.accepts_text() {
            self.should_quit = true;
            return;
        }

        match self.focus {
            FormField::ApiKey => self.handle_api_key_key(key),
            FormField::Announcement => {
                if key.code == KeyCode::Enter {
                    self.announcement.push('\n');
                } else {
                    edit_buffer(&mut self.announcement, key);
                }
            }
            FormField::Language => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.open_dropdown(),
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                    self.language_next()
                }
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                    self.language_previous()
                }
                _ => {}
            },
            FormField::Generate => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.start_generation();
                }
            }
            FormField::Results => match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.scroll_results_down(1),
                KeyCode::Up | KeyCode::Char('k') => self.scroll_results_up(1),
                KeyCode::Home | KeyCode::Char('g') => self.results_scroll = 0,
                KeyCode::End | KeyCode::Char('G') => {
                    self.results_scroll = self.results_scroll_max.get()
                }
                _ => {}
            },
            FormField::History => match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.history_next(),
                KeyCode::Up | KeyCode::Char('k') => self.history_previous(),
                KeyCode::Enter => self.open_selected_history(),
                _ => {}
            },
        }
    }

    fn handle_api_key_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            if self.has_api_key() {
                self.focus = FormField::Announcement;
            }
        } else {
            edit_buffer(&mut self.api_key, key);
        }

        if self.has_api_key() {
            if self.status.as_ref().map(|s| s.text.as_str()) == Some(API_KEY_WARNING) {
                self.status = None;
            }
        } else {
            self.status = Some(StatusMessage::warning(API_KEY_WARNING));
        }
    }
}

/// Apply a text-editing key to a buffer
fn edit_buffer(buffer: &mut String, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => buffer.clear(),
        KeyCode::Char(c) if !ctrl => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}
