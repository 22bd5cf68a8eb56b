// ABOUTME: Groq LLM provider implementation for detailed recipe suggestions
// ABOUTME: Uses the OpenAI-compatible chat completions API with a bounded request timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Groq Provider
//!
//! Implementation of the `LlmProvider` trait for Groq's LPU-accelerated inference.
//!
//! ## Configuration
//!
//! Set the `GROQ_API_KEY` environment variable with your API key from
//! Groq Console: <https://console.groq.com/keys>. `GROQ_MODEL`,
//! `GROQ_BASE_URL` and `GROQ_TIMEOUT_SECS` override the defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recipe_catalog::llm::{ChatMessage, ChatRequest, GroqConfig, GroqProvider, LlmProvider};
//! use recipe_catalog::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GroqProvider::new(GroqConfig::new("gsk_..."))?;
//!     let request = ChatRequest::new(vec![ChatMessage::user("A quick pasta dish?")]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::constants::providers;
use crate::errors::AppError;

const SERVICE: &str = "Groq";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// Groq API request structure (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

/// Message structure for Groq API (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for GroqMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Groq API response structure (OpenAI-compatible)
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
    model: String,
}

/// Choice in Groq response
#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
    finish_reason: Option<String>,
}

/// Message in Groq response
#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

/// Usage statistics in Groq response
#[derive(Debug, Deserialize)]
struct GroqUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Groq API error response
#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Connection settings for the Groq provider
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model used when a request does not name one
    pub default_model: String,
    /// Upper bound on a single completion call
    pub timeout: Duration,
}

impl GroqConfig {
    /// Default endpoint, model and timeout for the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: providers::GROQ_BASE_URL.to_owned(),
            default_model: providers::GROQ_DEFAULT_MODEL.to_owned(),
            timeout: Duration::from_secs(providers::GROQ_TIMEOUT_SECS),
        }
    }

    /// Point the provider at another endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the default model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Groq LLM provider using LPU-accelerated inference
pub struct GroqProvider {
    client: Client,
    config: GroqConfig,
}

impl GroqProvider {
    /// Create a new Groq provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: GroqConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Convert internal messages to Groq format
    fn convert_messages(messages: &[ChatMessage]) -> Vec<GroqMessage> {
        messages.iter().map(GroqMessage::from).collect()
    }

    /// Parse error response from Groq API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 | 403 => AppError::external_auth_failed(
                    SERVICE,
                    format!("authentication failed: {}", error_response.error.message),
                ),
                429 => AppError::external_rate_limited(
                    SERVICE,
                    format!("Rate limit exceeded: {}", error_response.error.message),
                ),
                _ => AppError::external_service(
                    SERVICE,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            AppError::external_service(
                SERVICE,
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn display_name(&self) -> &'static str {
        "Groq (Llama)"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        debug!("Sending chat completion request to Groq");

        let groq_request = GroqRequest {
            model: model.to_owned(),
            messages: Self::convert_messages(&request.messages),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Groq API: {}", e);
                if e.is_timeout() {
                    AppError::external_unavailable(SERVICE, format!("Request timed out: {e}"))
                } else {
                    AppError::external_unavailable(SERVICE, format!("Failed to connect: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        let choice = groq_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from Groq: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: groq_response.model,
            usage: groq_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let provider =
            GroqProvider::new(GroqConfig::new("key").with_base_url("http://localhost:9/v1/"))
                .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:9/v1/chat/completions"
        );
    }

    #[test]
    fn test_parse_error_response_maps_status() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let err = GroqProvider::parse_error_response(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.code, ErrorCode::ExternalAuthFailed);

        let err = GroqProvider::parse_error_response(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);

        let err = GroqProvider::parse_error_response(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }
}
