//! Prompt formatting

use super::types::{Language, Platform};

/// Prefix that turns an announcement into an image prompt
pub const IMAGE_PROMPT_PREFIX: &str = "Illustration style image representing: ";

/// Build the chat prompt for one platform.
///
/// The announcement is embedded verbatim.
pub fn format_post_prompt(announcement: &str, language: Language, platform: Platform) -> String {
    format!(
        "Write an exciting, buzz-worthy social media post in {language} about the following announcement:\n\n\
         {announcement}\n\n\
         Format it for {platform}, within {limit}.",
        limit = platform.word_limit(),
    )
}

/// Build the image prompt from the raw announcement
pub fn format_image_prompt(announcement: &str) -> String {
    format!("{IMAGE_PROMPT_PREFIX}{announcement}")
}
