// ABOUTME: Hugging Face Inference API provider used as the fallback suggestion backend
// ABOUTME: Posts a plain text prompt and reads generated_text from the first result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Hugging Face Provider
//!
//! The hosted Inference API is completion-style rather than chat-style: the
//! request body is `{"inputs": "<prompt>"}` and a successful reply is a JSON
//! array whose first element carries `generated_text`. Chat messages are
//! flattened into a single prompt before sending.
//!
//! Only HTTP 200 with a non-empty array counts as success. The client carries
//! a short timeout (10 seconds by default) since this provider is the last
//! resort before the static fallback message.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{ChatRequest, ChatResponse, LlmProvider};
use crate::constants::providers;
use crate::errors::AppError;

const SERVICE: &str = "HuggingFace";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceResult {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Connection settings for the Hugging Face provider
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Access token sent as a bearer token
    pub api_key: String,
    /// Full model inference URL
    pub api_url: String,
    /// Upper bound on a single inference call
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Default Mistral endpoint and 10 second timeout for the given token
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: providers::HF_API_URL.to_owned(),
            timeout: Duration::from_secs(providers::HF_TIMEOUT_SECS),
        }
    }

    /// Point the provider at another model URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Hugging Face hosted inference provider
pub struct HuggingFaceProvider {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Extract the suggestion text from an inference payload
    fn parse_generated_text(body: &str) -> Result<String, AppError> {
        let results: Vec<InferenceResult> = serde_json::from_str(body).map_err(|e| {
            AppError::external_service(SERVICE, format!("Unexpected response shape: {e}"))
        })?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned an empty result"))?;

        Ok(first
            .generated_text
            .unwrap_or_else(|| providers::HF_MISSING_TEXT.to_owned()))
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn display_name(&self) -> &'static str {
        "Hugging Face Inference (Mistral)"
    }

    fn default_model(&self) -> &str {
        providers::HF_DEFAULT_MODEL
    }

    #[instrument(skip(self, request))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let prompt = request.prompt_text();

        debug!("Sending inference request to Hugging Face");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&InferenceRequest { inputs: &prompt })
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Hugging Face API: {}", e);
                AppError::external_unavailable(SERVICE, format!("Request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Hugging Face API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if status != StatusCode::OK {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::external_auth_failed(SERVICE, format!("API returned {status}"))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    AppError::external_rate_limited(SERVICE, format!("API returned {status}"))
                }
                _ => AppError::external_service(
                    SERVICE,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            });
        }

        let content = Self::parse_generated_text(&body)?;
        debug!("Received response from Hugging Face: {} chars", content.len());

        Ok(ChatResponse {
            content,
            model: providers::HF_DEFAULT_MODEL.to_owned(),
            usage: None,
            finish_reason: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generated_text() {
        let body = r#"[{"generated_text":"Garlic chicken: sear, add garlic, serve."}]"#;
        assert_eq!(
            HuggingFaceProvider::parse_generated_text(body).unwrap(),
            "Garlic chicken: sear, add garlic, serve."
        );
    }

    #[test]
    fn test_missing_generated_text_uses_placeholder() {
        let text = HuggingFaceProvider::parse_generated_text(r#"[{"score":0.1}]"#).unwrap();
        assert_eq!(text, providers::HF_MISSING_TEXT);
    }

    #[test]
    fn test_empty_or_non_list_payload_is_error() {
        assert!(HuggingFaceProvider::parse_generated_text("[]").is_err());
        assert!(HuggingFaceProvider::parse_generated_text(r#"{"error":"loading"}"#).is_err());
    }
}
