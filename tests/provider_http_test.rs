// ABOUTME: HTTP-level tests for the Groq and Hugging Face providers against a mock server
// ABOUTME: Covers success payloads, error status mapping, timeouts and chain fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use recipe_catalog::{
    config::environment::LlmConfig,
    constants::{messages, providers},
    errors::ErrorCode,
    llm::{
        ChatMessage, ChatRequest, GroqConfig, GroqProvider, HuggingFaceConfig,
        HuggingFaceProvider, LlmProvider,
    },
    suggestions::SuggestionChain,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn groq(server: &MockServer) -> GroqProvider {
    GroqProvider::new(GroqConfig::new("gsk_test").with_base_url(server.uri())).unwrap()
}

fn huggingface(server: &MockServer) -> HuggingFaceProvider {
    HuggingFaceProvider::new(
        HuggingFaceConfig::new("hf_test").with_api_url(format!("{}/models/mistral", server.uri())),
    )
    .unwrap()
}

fn request() -> ChatRequest {
    ChatRequest::new(vec![ChatMessage::user("Suggest a recipe with rice")])
        .with_temperature(0.7)
        .with_max_tokens(1000)
}

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 30, "total_tokens": 42}
    })
}

#[tokio::test]
async fn test_groq_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": providers::GROQ_DEFAULT_MODEL,
            "max_tokens": 1000,
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Fried rice")))
        .expect(1)
        .mount(&server)
        .await;

    let response = groq(&server).complete(&request()).await.unwrap();
    assert_eq!(response.content, "Fried rice");
    assert_eq!(response.usage.unwrap().total_tokens, 42);
}

#[tokio::test]
async fn test_groq_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let err = groq(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);

    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = groq(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_groq_timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = GroqProvider::new(
        GroqConfig::new("gsk_test")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = provider.complete(&request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_huggingface_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/mistral"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({"inputs": "Suggest a recipe with rice"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"generated_text": "Rice pilaf: toast rice, simmer."}])),
        )
        .mount(&server)
        .await;

    let response = huggingface(&server).complete(&request()).await.unwrap();
    assert_eq!(response.content, "Rice pilaf: toast rice, simmer.");
}

#[tokio::test]
async fn test_huggingface_non_200_and_empty_list_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "Model is loading"})),
        )
        .mount(&server)
        .await;

    assert!(huggingface(&server).complete(&request()).await.is_err());

    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(huggingface(&server).complete(&request()).await.is_err());
}

#[tokio::test]
async fn test_chain_falls_back_from_groq_to_huggingface() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached", "type": "rate_limit"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/mistral"))
        .and(body_json(json!({
            "inputs": "Suggest a simple recipe using these ingredients: chicken, garlic. Include cooking instructions."
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "Garlic chicken"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = LlmConfig {
        groq: Some(GroqConfig::new("gsk_test").with_base_url(server.uri())),
        huggingface: Some(
            HuggingFaceConfig::new("hf_test")
                .with_api_url(format!("{}/models/mistral", server.uri())),
        ),
    };
    let chain = SuggestionChain::from_config(&config).unwrap();

    let tokens = vec!["chicken".to_owned(), "garlic".to_owned()];
    let result = chain.suggest(&tokens).await;
    assert_eq!(result.suggestion, "Garlic chicken");
    assert_eq!(result.ingredients_used, tokens);
}

#[tokio::test]
async fn test_chain_reports_unavailable_when_both_fail() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = LlmConfig {
        groq: Some(GroqConfig::new("gsk_test").with_base_url(server.uri())),
        huggingface: Some(
            HuggingFaceConfig::new("hf_test")
                .with_api_url(format!("{}/models/mistral", server.uri())),
        ),
    };
    let chain = SuggestionChain::from_config(&config).unwrap();

    let result = chain.suggest(&["rice".to_owned()]).await;
    assert_eq!(result.suggestion, messages::PROVIDERS_UNAVAILABLE);
    assert_eq!(result.ingredients_used, vec!["rice".to_owned()]);
}
