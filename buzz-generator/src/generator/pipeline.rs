//! Sequential generation pipeline
//!
//! A run makes three chat calls (one per [`Platform`], in order) followed by
//! one image call. Nothing runs in parallel and nothing is retried.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::prompt::{format_image_prompt, format_post_prompt};
use super::types::{
    ErrorPolicy, GeneratedPosts, GenerationOutput, GenerationRequest, Language, Platform,
};

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Backend that turns prompts into text and images
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Complete a single user prompt and return the raw text
    async fn complete(&self, prompt: &str) -> ProviderResult<String>;

    /// Generate one image and return its URL, if the provider gave one
    async fn illustrate(&self, prompt: &str) -> ProviderResult<Option<String>>;
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("announcement is empty")]
    EmptyAnnouncement,

    #[error("failed to generate {platform} post: {message}")]
    Post { platform: Platform, message: String },

    #[error("failed to generate image: {message}")]
    Image { message: String },
}

/// Drives a [`ContentProvider`] through one run
#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn ContentProvider>,
    policy: ErrorPolicy,
}

impl Generator {
    pub fn new(provider: Arc<dyn ContentProvider>, policy: ErrorPolicy) -> Self {
        Self { provider, policy }
    }

    /// Generate the post for one platform
    pub async fn generate_post(
        &self,
        announcement: &str,
        language: Language,
        platform: Platform,
    ) -> Result<String, GenerationError> {
        let prompt = format_post_prompt(announcement, language, platform);

        match self.provider.complete(&prompt).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::warn!(%platform, error = %e, "Post generation failed");
                match self.policy {
                    ErrorPolicy::Substitute => Ok(format!("Error generating post: {}", e)),
                    ErrorPolicy::Abort => Err(GenerationError::Post {
                        platform,
                        message: e.to_string(),
                    }),
                }
            }
        }
    }

    /// Generate the illustration for the raw announcement
    pub async fn generate_image(
        &self,
        announcement: &str,
    ) -> Result<Option<String>, GenerationError> {
        let prompt = format_image_prompt(announcement);

        match self.provider.illustrate(&prompt).await {
            Ok(url) => {
                if url.is_none() {
                    tracing::warn!("Image provider returned no URL");
                }
                Ok(url)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Image generation failed");
                match self.policy {
                    ErrorPolicy::Substitute => Ok(None),
                    ErrorPolicy::Abort => Err(GenerationError::Image {
                        message: e.to_string(),
                    }),
                }
            }
        }
    }

    /// Run all four calls for one request
    pub async fn run(&self, request: &GenerationRequest) -> Result<GenerationOutput, GenerationError> {
        if request.announcement.trim().is_empty() {
            return Err(GenerationError::EmptyAnnouncement);
        }

        tracing::info!(
            language = %request.language,
            chars = request.announcement.chars().count(),
            policy = ?self.policy,
            "Starting generation run"
        );

        let mut posts = GeneratedPosts::new();
        for platform in Platform::ALL {
            let text = self
                .generate_post(&request.announcement, request.language, platform)
                .await?;
            tracing::debug!(%platform, chars = text.chars().count(), "Post generated");
            posts.insert(platform, text);
        }

        let image_url = self.generate_image(&request.announcement).await?;

        tracing::info!(has_image = image_url.is_some(), "Generation run finished");

        Ok(GenerationOutput { posts, image_url })
    }
}
