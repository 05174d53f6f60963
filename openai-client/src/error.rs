//! Error types for the OpenAI client

use thiserror::Error;

/// Errors returned by [`crate::OpenAiClient`]
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// No API key was supplied
    #[error("missing OpenAI API key")]
    MissingApiKey,

    /// The configured base URL could not be used
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure (connect, TLS, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response parsed but carried nothing usable
    #[error("empty response from {0}")]
    EmptyResponse(&'static str),
}

impl OpenAiError {
    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            OpenAiError::Api { status, .. } => Some(*status),
            OpenAiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, OpenAiError>;
