//! Data models for the buzz generator TUI
//!
//! This module re-exports the state structures from the app module so the UI
//! code can depend on `crate::models` only.

pub use crate::app::{
    App,
    FormField,
    PendingGeneration,
    StatusKind,
    StatusMessage,
    API_KEY_WARNING,
    EMPTY_ANNOUNCEMENT_HINT,
};
