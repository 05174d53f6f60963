//! Session history of generation runs
//!
//! The history lives only as long as the process. Entries are appended after
//! each completed run and never removed; the sidebar lists them newest-first
//! with a 1-based display number that stays stable as new runs arrive.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::generator::{GeneratedPosts, GenerationOutput, GenerationRequest, Language};

/// Characters of the instruction shown in the sidebar
pub const PREVIEW_CHARS: usize = 50;

/// One completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub instruction: String,
    pub language: Language,
    pub posts: GeneratedPosts,
    pub image_url: Option<String>,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(request: GenerationRequest, output: GenerationOutput) -> Self {
        Self {
            instruction: request.announcement,
            language: request.language,
            posts: output.posts,
            image_url: output.image_url,
            created_at: Local::now(),
        }
    }

    /// Sidebar preview: first 50 characters followed by `...`
    pub fn preview(&self) -> String {
        format!("{}...", truncate_chars(&self.instruction, PREVIEW_CHARS))
    }

    /// Plain-text rendering used by the headless command
    pub fn to_report(&self) -> String {
        let mut out = String::from("📄 Generated Posts\n");
        for (platform, text) in self.posts.iter() {
            out.push_str(&format!("\n### {}\n{}\n", platform, text));
        }
        out.push_str("\n🖼️ AI-generated Image\n");
        match &self.image_url {
            Some(url) => out.push_str(url),
            None => out.push_str("Image generation failed."),
        }
        out.push('\n');
        out
    }
}

/// Append-only list of runs
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return its display number
    pub fn push(&mut self, entry: HistoryEntry) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by display number (1 = oldest)
    pub fn get(&self, number: usize) -> Option<&HistoryEntry> {
        number.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    /// `(display_number, entry)` pairs, most recent first
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        let total = self.entries.len();
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(move |(idx, entry)| (total - idx, entry))
    }
}

/// Prefix of `s` holding at most `max` characters
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
