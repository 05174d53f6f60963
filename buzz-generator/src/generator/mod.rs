//! Announcement-to-posts generation
//!
//! This module contains the domain types, the prompt formatter and the
//! sequential generation pipeline that drives a [`ContentProvider`].

mod pipeline;
mod prompt;
mod types;

pub use pipeline::*;
pub use prompt::*;
pub use types::*;
