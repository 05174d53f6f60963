//! Minimal async client for the two OpenAI endpoints the buzz generator uses:
//! chat completions and image generations.
//!
//! # Example
//!
//! ```no_run
//! use openai_client::{ChatCompletionRequest, ChatMessage, OpenAiClient};
//!
//! # async fn example() -> Result<(), openai_client::OpenAiError> {
//! let client = OpenAiClient::new("sk-...")?;
//! let request = ChatCompletionRequest::new("gpt-4o", vec![ChatMessage::user("Hello!")])
//!     .temperature(0.8);
//! let response = client.create_chat_completion(&request).await?;
//! println!("{}", response.first_content().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{OpenAiClient, OpenAiClientBuilder, DEFAULT_API_BASE};
pub use error::{OpenAiError, Result};
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, ImageData,
    ImageGenerationRequest, ImageGenerationResponse, Usage,
};
