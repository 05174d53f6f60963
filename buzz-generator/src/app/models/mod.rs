//! Data models for the application
//!
//! This module contains the state structures used by the form.

mod app;
mod form;
mod status;

// Re-export all public types
pub use app::*;
pub use form::*;
pub use status::*;
