// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, scripted LLM providers and router request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_catalog`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use recipe_catalog::{
    config::environment::ServerConfig,
    errors::AppError,
    llm::{ChatRequest, ChatResponse, LlmProvider, PromptStyle},
    server::{build_router, AppState},
    store::RecipeStore,
    suggestions::{SuggestionChain, SuggestionStrategy},
};
use serde_json::Value;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider returning a fixed reply or a fixed failure, counting calls
pub struct ScriptedProvider {
    name: &'static str,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Provider that always answers with `text`
    pub fn answering(name: &'static str, text: &str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Some(text.to_owned()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Provider that always fails as unreachable
    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of completions attempted
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.name
    }

    fn default_model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.as_ref().map_or_else(
            || Err(AppError::external_unavailable(self.name, "connection refused")),
            |text| {
                Ok(ChatResponse {
                    content: text.clone(),
                    model: "scripted".to_owned(),
                    usage: None,
                    finish_reason: None,
                })
            },
        )
    }
}

/// Chain of primary then secondary scripted providers
pub fn two_tier_chain(
    primary: Arc<ScriptedProvider>,
    secondary: Arc<ScriptedProvider>,
) -> SuggestionChain {
    SuggestionChain::new(vec![
        SuggestionStrategy::new(primary, PromptStyle::Detailed),
        SuggestionStrategy::new(secondary, PromptStyle::Simple),
    ])
}

/// Router over the seeded catalog and the given chain
pub fn test_app(chain: SuggestionChain) -> Router {
    init_test_logging();
    let state = AppState::new(RecipeStore::seeded(), chain);
    build_router(state, &ServerConfig::default())
}

/// Router over the seeded catalog with no providers configured
pub fn unconfigured_app() -> Router {
    test_app(SuggestionChain::default())
}

/// Send a request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

/// GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Request with a JSON body
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// DELETE request
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
