//! OpenAI-backed [`ContentProvider`]

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequest, ChatMessage, ImageGenerationRequest, OpenAiClient, OpenAiError,
};
use std::sync::Arc;

use crate::generator::{ContentProvider, ProviderResult};

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const IMAGE_SIZE: &str = "1024x1024";

/// Models and endpoint used for a session. The API key is supplied separately
/// because it is typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub api_base: String,
    pub chat_model: String,
    pub image_model: String,
    pub temperature: f32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_base: openai_client::DEFAULT_API_BASE.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Builds a provider from the API key currently in the form
pub type ProviderFactory =
    Arc<dyn Fn(&str) -> ProviderResult<Arc<dyn ContentProvider>> + Send + Sync>;

pub struct OpenAiProvider {
    client: OpenAiClient,
    settings: ProviderSettings,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, settings: ProviderSettings) -> Result<Self, OpenAiError> {
        let client = OpenAiClient::builder(api_key)
            .base_url(settings.api_base.clone())
            .build()?;
        Ok(Self { client, settings })
    }

    /// Factory producing an [`OpenAiProvider`] for whatever key the form holds
    pub fn factory(settings: ProviderSettings) -> ProviderFactory {
        Arc::new(move |api_key: &str| -> ProviderResult<Arc<dyn ContentProvider>> {
            let provider = OpenAiProvider::new(api_key, settings.clone())?;
            Ok(Arc::new(provider) as Arc<dyn ContentProvider>)
        })
    }
}

#[async_trait]
impl ContentProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        let request = ChatCompletionRequest::new(
            self.settings.chat_model.clone(),
            vec![ChatMessage::user(prompt)],
        )
        .temperature(self.settings.temperature);

        let response = self.client.create_chat_completion(&request).await?;
        let content = response
            .first_content()
            .ok_or(OpenAiError::EmptyResponse("chat completion"))?;
        Ok(content.to_string())
    }

    async fn illustrate(&self, prompt: &str) -> ProviderResult<Option<String>> {
        let request = ImageGenerationRequest::new(self.settings.image_model.clone(), prompt)
            .n(1)
            .size(IMAGE_SIZE);

        let response = self.client.create_image(&request).await?;
        Ok(response.first_url().map(str::to_string))
    }
}
