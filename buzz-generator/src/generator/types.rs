//! Domain types for a generation run

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output language of the generated posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
    Chinese,
}

impl Language {
    /// All languages in dropdown order
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
        }
    }

    /// Position in [`Language::ALL`]
    pub fn index(&self) -> usize {
        Language::ALL
            .iter()
            .position(|l| l == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target social platform. Declaration order is generation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Instagram,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Instagram, Platform::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
        }
    }

    /// Length directive embedded in the prompt
    pub fn word_limit(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "200-300 words",
            Platform::Instagram | Platform::Twitter => "under 150 words",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a provider call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Replace a failed post with an inline error and a failed image with nothing
    #[default]
    Substitute,
    /// Stop the run at the first failure
    Abort,
}

/// Posts of one run keyed by platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPosts(BTreeMap<Platform, String>);

impl GeneratedPosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: Platform, text: String) {
        self.0.insert(platform, text);
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    /// Posts in platform order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.0.iter().map(|(p, text)| (*p, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Platform, String)> for GeneratedPosts {
    fn from_iter<I: IntoIterator<Item = (Platform, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Inputs of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub announcement: String,
    pub language: Language,
}

impl GenerationRequest {
    pub fn new(announcement: impl Into<String>, language: Language) -> Self {
        Self {
            announcement: announcement.into(),
            language,
        }
    }
}

/// Artifacts of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub posts: GeneratedPosts,
    pub image_url: Option<String>,
}
