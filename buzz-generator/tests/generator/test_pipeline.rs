//! Tests for the generation pipeline
//!
//! Tests cover:
//! - Call order and trimming of successful runs
//! - Substitute policy: inline post errors, missing image
//! - Abort policy: first failure ends the run

use std::sync::Arc;

use super::common::*;
use buzz_generator::generator::*;

fn request() -> GenerationRequest {
    GenerationRequest::new("We are launching an AI health tracker", Language::Spanish)
}

// ============================================================================
// Successful runs
// ============================================================================

#[tokio::test]
async fn test_successful_run_produces_five_artifacts() {
    let provider = Arc::new(FakeProvider::new());
    let generator = Generator::new(provider.clone(), ErrorPolicy::Substitute);

    let output = generator.run(&request()).await.unwrap();

    assert_eq!(output.posts.len(), 3);
    for platform in Platform::ALL {
        assert_eq!(
            output.posts.get(platform),
            Some(format!("{} post about the launch", platform).as_str())
        );
    }
    assert_eq!(
        output.image_url.as_deref(),
        Some("https://images.example.com/launch.png")
    );

    let prompts = provider.recorded();
    assert_eq!(prompts.len(), 4);
    assert!(prompts[..3].iter().all(|p| p.contains("post in Spanish")));
    assert_eq!(
        prompts[3],
        "Illustration style image representing: We are launching an AI health tracker"
    );
}

#[tokio::test]
async fn test_missing_image_url_is_not_an_error() {
    let provider = Arc::new(FakeProvider::new().without_image_url());
    let generator = Generator::new(provider, ErrorPolicy::Abort);

    let output = generator.run(&request()).await.unwrap();
    assert!(output.image_url.is_none());
}

// ============================================================================
// Substitute policy
// ============================================================================

#[tokio::test]
async fn test_substitute_replaces_failed_post_with_error_text() {
    let provider = Arc::new(FakeProvider::new().failing_on(Platform::Instagram));
    let generator = Generator::new(provider.clone(), ErrorPolicy::Substitute);

    let output = generator.run(&request()).await.unwrap();

    assert_eq!(
        output.posts.get(Platform::Instagram),
        Some("Error generating post: Instagram quota exceeded")
    );
    assert_eq!(
        output.posts.get(Platform::Twitter),
        Some("Twitter post about the launch")
    );
    // The run carried on to the image
    assert_eq!(provider.recorded().len(), 4);
}

#[tokio::test]
async fn test_substitute_drops_failed_image() {
    let provider = Arc::new(FakeProvider::new().failing_image());
    let generator = Generator::new(provider, ErrorPolicy::Substitute);

    let output = generator.run(&request()).await.unwrap();
    assert!(output.image_url.is_none());
    assert_eq!(output.posts.len(), 3);
}

// ============================================================================
// Abort policy
// ============================================================================

#[tokio::test]
async fn test_abort_stops_at_first_failed_post() {
    let provider = Arc::new(FakeProvider::new().failing_on(Platform::LinkedIn));
    let generator = Generator::new(provider.clone(), ErrorPolicy::Abort);

    let err = generator.run(&request()).await.unwrap_err();

    match err {
        GenerationError::Post { platform, message } => {
            assert_eq!(platform, Platform::LinkedIn);
            assert_eq!(message, "LinkedIn quota exceeded");
        }
        other => panic!("expected post error, got {:?}", other),
    }
    assert_eq!(provider.recorded().len(), 1);
}

#[tokio::test]
async fn test_abort_reports_image_failure() {
    let provider = Arc::new(FakeProvider::new().failing_image());
    let generator = Generator::new(provider, ErrorPolicy::Abort);

    let err = generator.run(&request()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to generate image: content policy violation"
    );
}
