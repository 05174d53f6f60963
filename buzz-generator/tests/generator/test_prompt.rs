//! Tests for prompt formatting
//!
//! The word-limit directive must follow the selected platform and the
//! language and announcement must be embedded verbatim.

use buzz_generator::generator::*;

// ============================================================================
// Word limits
// ============================================================================

#[test]
fn test_linkedin_prompt_asks_for_long_post() {
    let prompt = format_post_prompt("New office opening", Language::English, Platform::LinkedIn);
    assert!(prompt.ends_with("Format it for LinkedIn, within 200-300 words."));
    assert!(!prompt.contains("under 150 words"));
}

#[test]
fn test_short_platforms_ask_for_under_150_words() {
    for platform in [Platform::Instagram, Platform::Twitter] {
        let prompt = format_post_prompt("New office opening", Language::English, platform);
        assert!(
            prompt.ends_with(&format!("Format it for {}, within under 150 words.", platform)),
            "unexpected prompt for {}: {}",
            platform,
            prompt
        );
        assert!(!prompt.contains("200-300 words"));
    }
}

// ============================================================================
// Language and announcement
// ============================================================================

#[test]
fn test_every_language_is_named_in_prompt() {
    for language in Language::ALL {
        let prompt = format_post_prompt("x", language, Platform::Twitter);
        assert!(prompt.starts_with(&format!(
            "Write an exciting, buzz-worthy social media post in {} about the following announcement:",
            language
        )));
    }
}

#[test]
fn test_announcement_is_embedded_verbatim() {
    let announcement = "Line one\n  Line two with {braces} and 100% emoji 🚀";
    let prompt = format_post_prompt(announcement, Language::Chinese, Platform::Instagram);
    assert!(prompt.contains(&format!("\n\n{}\n\n", announcement)));
}

#[test]
fn test_image_prompt_uses_raw_announcement() {
    assert_eq!(
        format_image_prompt("  spaced  "),
        "Illustration style image representing:   spaced  "
    );
}
