//! Command-line arguments
//!
//! Every option can also come from the environment (a `.env` file is loaded
//! before parsing). Without a subcommand the interactive form is started.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::generator::{ErrorPolicy, Language};
use crate::provider::{
    ProviderSettings, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_TEMPERATURE,
};

/// Social media buzz generator
///
/// Turns one announcement into LinkedIn, Instagram and Twitter posts plus an
/// AI-generated illustration.
#[derive(Parser, Debug, Clone)]
#[command(name = "buzz-generator")]
#[command(about = "Generate buzz-worthy social media posts and an image with OpenAI")]
#[command(version)]
pub struct Args {
    /// OpenAI API key (pre-fills the key field of the form)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE", default_value = openai_client::DEFAULT_API_BASE)]
    pub api_base: String,

    /// Chat completion model used for the posts
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,

    /// Image generation model used for the illustration
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,

    /// Initial output language
    #[arg(long, value_enum, ignore_case = true, default_value_t = Language::English)]
    pub language: Language,

    /// How provider failures are reported
    ///
    /// `substitute` shows an inline error in place of a failed post and an
    /// error banner for a failed image; `abort` stops the run.
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Substitute)]
    pub error_policy: ErrorPolicy,

    /// Log filter (overrides RUST_LOG), e.g. `debug` or `buzz_generator=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run one generation without the interactive form and print the result
    Generate {
        /// What you want to announce
        #[arg(short, long)]
        announcement: String,

        /// Print the run as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            api_base: self.api_base.clone(),
            chat_model: self.chat_model.clone(),
            image_model: self.image_model.clone(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// API key with surrounding whitespace removed, empty when unset
    pub fn api_key(&self) -> String {
        self.api_key.as_deref().unwrap_or_default().trim().to_string()
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            anyhow::bail!("--api-base must be an http(s) URL, got '{}'", self.api_base);
        }
        if self.chat_model.trim().is_empty() || self.image_model.trim().is_empty() {
            anyhow::bail!("model names must not be empty");
        }

        if let Some(Command::Generate { announcement, .. }) = &self.command {
            if self.api_key().is_empty() {
                anyhow::bail!("generate requires --api-key or OPENAI_API_KEY");
            }
            if announcement.trim().is_empty() {
                anyhow::bail!("--announcement must not be empty");
            }
        }
        Ok(())
    }
}
