//! OpenAiClient for chat completions and image generations
//!
//! The client is a thin wrapper over a shared `reqwest::Client`: one bearer
//! token, one base URL, one JSON request per call. There is no retry or
//! streaming support.
//!
//! # Example: Custom base URL
//!
//! ```no_run
//! use openai_client::OpenAiClient;
//!
//! # fn example() -> Result<(), openai_client::OpenAiError> {
//! let client = OpenAiClient::builder("sk-...")
//!     .base_url("http://localhost:8080/v1")
//!     .build()?;
//! assert_eq!(client.base_url(), "http://localhost:8080/v1");
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OpenAiError, Result};
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};

/// Default OpenAI REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const IMAGE_GENERATIONS_PATH: &str = "/images/generations";

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Builder for [`OpenAiClient`]
pub struct OpenAiClientBuilder {
    api_key: String,
    base_url: String,
}

impl OpenAiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn build(self) -> Result<OpenAiClient> {
        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }

        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OpenAiError::InvalidBaseUrl(self.base_url));
        }

        Ok(OpenAiClient {
            http: reqwest::Client::builder().build()?,
            api_key,
            base_url,
        })
    }
}

/// Client for the OpenAI REST API
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the key
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client against [`DEFAULT_API_BASE`]
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> OpenAiClientBuilder {
        OpenAiClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /chat/completions`
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        #[cfg(feature = "tracing-support")]
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            temperature = ?request.temperature,
            "Sending chat completion request"
        );

        let response: ChatCompletionResponse = self.post(CHAT_COMPLETIONS_PATH, request).await?;

        #[cfg(feature = "tracing-support")]
        tracing::debug!(
            choices = response.choices.len(),
            total_tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            "Chat completion received"
        );

        Ok(response)
    }

    /// `POST /images/generations`
    pub async fn create_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        #[cfg(feature = "tracing-support")]
        tracing::debug!(
            model = %request.model,
            n = ?request.n,
            size = ?request.size,
            "Sending image generation request"
        );

        let response: ImageGenerationResponse = self.post(IMAGE_GENERATIONS_PATH, request).await?;

        #[cfg(feature = "tracing-support")]
        tracing::debug!(images = response.data.len(), "Image generation received");

        Ok(response)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = api_error_message(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

            #[cfg(feature = "tracing-support")]
            tracing::warn!(status = status.as_u16(), %url, %message, "OpenAI request failed");

            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

/// Extract `error.message` from an API error body, falling back to the raw text
fn api_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => Some(envelope.error.message),
        Err(_) => Some(body.to_string()),
    }
}
