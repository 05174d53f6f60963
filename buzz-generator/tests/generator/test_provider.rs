//! Tests for the OpenAI provider against a mock server
//!
//! A full run must make three chat calls with the expected model, temperature
//! and prompt, then one image call for a single square image.

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use buzz_generator::generator::*;
use buzz_generator::provider::{OpenAiProvider, ProviderSettings};

fn settings_for(server: &MockServer) -> ProviderSettings {
    ProviderSettings {
        api_base: format!("{}/v1", server.uri()),
        ..ProviderSettings::default()
    }
}

fn chat_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    }))
}

async fn mount_chat(server: &MockServer, platform: Platform, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-live"))
        .and(body_partial_json(json!({"model": "gpt-4o", "temperature": 0.8})))
        .and(body_string_contains(format!("Format it for {},", platform)))
        .respond_with(chat_reply(content))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_against_mock_openai() {
    let server = MockServer::start().await;

    mount_chat(&server, Platform::LinkedIn, "  Long LinkedIn story  ").await;
    mount_chat(&server, Platform::Instagram, "Insta vibes ✨").await;
    mount_chat(&server, Platform::Twitter, "Tweet!\n").await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(json!({
            "model": "dall-e-3",
            "prompt": "Illustration style image representing: Robot bakery opens",
            "n": 1,
            "size": "1024x1024"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1700000000,
            "data": [{"url": "https://images.example.com/bakery.png"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-live", settings_for(&server)).unwrap();
    let generator = Generator::new(Arc::new(provider), ErrorPolicy::Abort);

    let output = generator
        .run(&GenerationRequest::new("Robot bakery opens", Language::English))
        .await
        .unwrap();

    assert_eq!(output.posts.get(Platform::LinkedIn), Some("Long LinkedIn story"));
    assert_eq!(output.posts.get(Platform::Instagram), Some("Insta vibes ✨"));
    assert_eq!(output.posts.get(Platform::Twitter), Some("Tweet!"));
    assert_eq!(
        output.image_url.as_deref(),
        Some("https://images.example.com/bakery.png")
    );
}

#[tokio::test]
async fn test_api_errors_become_inline_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached for gpt-4o", "type": "requests"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "Your request was rejected by the safety system."}
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-live", settings_for(&server)).unwrap();
    let generator = Generator::new(Arc::new(provider), ErrorPolicy::Substitute);

    let output = generator
        .run(&GenerationRequest::new("Anything", Language::French))
        .await
        .unwrap();

    for (_, text) in output.posts.iter() {
        assert_eq!(
            text,
            "Error generating post: OpenAI API error (429): Rate limit reached for gpt-4o"
        );
    }
    assert!(output.image_url.is_none());
}

#[tokio::test]
async fn test_empty_choice_content_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::new("sk-live", settings_for(&server)).unwrap();
    let err = provider.complete("hello").await.unwrap_err();
    assert_eq!(err.to_string(), "empty response from chat completion");
}
