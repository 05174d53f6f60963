//! Main application state

use std::cell::Cell;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::generator::{ErrorPolicy, GenerationError, GenerationOutput, GenerationRequest, Language};
use crate::history::History;
use crate::provider::ProviderFactory;

use super::{FormField, StatusMessage};

/// A run in flight on the tokio runtime
pub struct PendingGeneration {
    pub request: GenerationRequest,
    pub started: Instant,
    pub rx: mpsc::UnboundedReceiver<Result<GenerationOutput, GenerationError>>,
}

/// Main application state
pub struct App {
    pub should_quit: bool,

    // Form state
    pub focus: FormField,
    pub api_key: String,
    pub announcement: String,
    pub language: Language,

    // Language dropdown state
    pub show_dropdown: bool,
    pub dropdown_selected: usize,

    // Status line under the form
    pub status: Option<StatusMessage>,

    // History sidebar
    pub history: History,
    pub history_selected: usize, // index into the newest-first list
    pub displayed_entry: Option<usize>, // display number of the run shown in the results pane

    // Results pane scrolling
    pub results_scroll: usize,
    pub results_scroll_max: Cell<usize>, // written by each render

    // Running generation
    pub pending: Option<PendingGeneration>,
    pub spinner_frame: usize,

    // Provider wiring
    pub policy: ErrorPolicy,
    pub provider_factory: ProviderFactory,

    // Tokio runtime handle for spawning tasks
    pub tokio_handle: tokio::runtime::Handle,
}
