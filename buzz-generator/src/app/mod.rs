//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by concern.

use std::cell::Cell;

use crate::generator::{ErrorPolicy, Language};
use crate::history::History;
use crate::provider::ProviderFactory;

mod models;
pub use models::*;

// Declare submodules
mod generation;
mod input;
mod navigation;

pub use navigation::RESULTS_PAGE;

/// Shown while no API key has been entered
pub const API_KEY_WARNING: &str = "Please enter your OpenAI API key to proceed.";

/// Shown when Generate is pressed with nothing to announce
pub const EMPTY_ANNOUNCEMENT_HINT: &str = "Please describe what you want to announce.";

impl App {
    pub fn new(
        api_key: String,
        language: Language,
        policy: ErrorPolicy,
        provider_factory: ProviderFactory,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FormField::ApiKey,
            api_key,
            announcement: String::new(),
            language,
            show_dropdown: false,
            dropdown_selected: language.index(),
            status: None,
            history: History::new(),
            history_selected: 0,
            displayed_entry: None,
            results_scroll: 0,
            results_scroll_max: Cell::new(0),
            pending: None,
            spinner_frame: 0,
            policy,
            provider_factory,
            tokio_handle,
        };

        if app.has_api_key() {
            app.focus = FormField::Announcement;
        } else {
            app.status = Some(StatusMessage::warning(API_KEY_WARNING));
        }

        app
    }

    /// The form is locked until this is true
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
