// ABOUTME: Ordered fallback chain of LLM providers producing recipe suggestions
// ABOUTME: Degrades every provider failure to a user-legible static message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Suggestion Provider Chain
//!
//! A [`SuggestionChain`] holds an ordered list of [`SuggestionStrategy`]
//! entries, each pairing an [`LlmProvider`] with the prompt and sampling
//! settings it should receive. [`SuggestionChain::suggest`] tries them in
//! order and returns the first non-empty reply.
//!
//! The chain never returns an error. Empty input, a chain with no configured
//! providers, and a chain whose every attempt failed each map to a fixed
//! message, with the input echoed back.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::environment::LlmConfig;
use crate::constants::{messages, providers};
use crate::errors::{AppError, AppResult};
use crate::llm::{
    ChatMessage, ChatRequest, GroqProvider, HuggingFaceProvider, LlmProvider, PromptStyle,
};
use crate::models::SuggestionResult;

/// One provider attempt in the fallback chain
pub struct SuggestionStrategy {
    provider: Arc<dyn LlmProvider>,
    style: PromptStyle,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl SuggestionStrategy {
    /// Use `provider` with the given prompt style and provider defaults
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, style: PromptStyle) -> Self {
        Self {
            provider,
            style,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Bound the generated output length
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Provider identifier
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Provider display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.provider.display_name()
    }

    /// Model the provider will use
    #[must_use]
    pub fn model(&self) -> &str {
        self.provider.default_model()
    }

    fn build_request(&self, tokens: &[String]) -> ChatRequest {
        let mut request = ChatRequest::new(vec![ChatMessage::user(self.style.render(tokens))])
            .with_model(self.provider.default_model());
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }

    /// Ask the provider once; an empty reply counts as a failure
    ///
    /// # Errors
    ///
    /// Returns the provider's error, or an external-service error for an
    /// empty reply.
    pub async fn attempt(&self, tokens: &[String]) -> AppResult<String> {
        let request = self.build_request(tokens);
        let response = self.provider.complete(&request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(AppError::external_service(
                self.provider.display_name(),
                "returned an empty suggestion",
            ));
        }
        Ok(text.to_owned())
    }
}

/// Summary of a configured provider, in chain order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProviderInfo {
    /// Position in the chain, starting at 1
    pub position: usize,
    /// Provider identifier
    pub name: String,
    /// Provider display name
    pub display_name: String,
    /// Model the provider will use
    pub model: String,
}

/// Ordered provider fallback chain
#[derive(Default)]
pub struct SuggestionChain {
    strategies: Vec<SuggestionStrategy>,
}

impl SuggestionChain {
    /// Chain trying `strategies` in the given order
    #[must_use]
    pub fn new(strategies: Vec<SuggestionStrategy>) -> Self {
        Self { strategies }
    }

    /// Build the chain from configured credentials: Groq first, then Hugging Face
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        let mut strategies = Vec::new();

        if let Some(groq) = &config.groq {
            let provider = GroqProvider::new(groq.clone())?;
            strategies.push(
                SuggestionStrategy::new(Arc::new(provider), PromptStyle::Detailed)
                    .with_temperature(providers::GROQ_TEMPERATURE)
                    .with_max_tokens(providers::GROQ_MAX_TOKENS),
            );
        }

        if let Some(huggingface) = &config.huggingface {
            let provider = HuggingFaceProvider::new(huggingface.clone())?;
            strategies.push(SuggestionStrategy::new(
                Arc::new(provider),
                PromptStyle::Simple,
            ));
        }

        if strategies.is_empty() {
            warn!("No suggestion provider credentials configured; AI suggestions will return setup help");
        }

        Ok(Self::new(strategies))
    }

    /// Whether any provider is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.strategies.is_empty()
    }

    /// Configured providers in attempt order
    #[must_use]
    pub fn providers(&self) -> Vec<ProviderInfo> {
        self.strategies
            .iter()
            .enumerate()
            .map(|(index, strategy)| ProviderInfo {
                position: index + 1,
                name: strategy.provider_name().to_owned(),
                display_name: strategy.display_name().to_owned(),
                model: strategy.model().to_owned(),
            })
            .collect()
    }

    /// Produce a suggestion for the tokens, never failing
    pub async fn suggest(&self, tokens: &[String]) -> SuggestionResult {
        if tokens.is_empty() {
            return SuggestionResult {
                suggestion: messages::EMPTY_INPUT.to_owned(),
                ingredients_used: Vec::new(),
            };
        }

        let echo = || tokens.to_vec();

        if self.strategies.is_empty() {
            return SuggestionResult {
                suggestion: messages::NOT_CONFIGURED.to_owned(),
                ingredients_used: echo(),
            };
        }

        for strategy in &self.strategies {
            let started = Instant::now();
            match strategy.attempt(tokens).await {
                Ok(suggestion) => {
                    info!(
                        provider = strategy.provider_name(),
                        duration_ms = started.elapsed().as_millis() as u64,
                        "Recipe suggestion generated"
                    );
                    return SuggestionResult {
                        suggestion,
                        ingredients_used: echo(),
                    };
                }
                Err(e) => {
                    warn!(
                        provider = strategy.provider_name(),
                        error.code = ?e.code,
                        duration_ms = started.elapsed().as_millis() as u64,
                        "Suggestion provider failed, trying next: {}",
                        e.message
                    );
                }
            }
        }

        debug!("Every suggestion provider failed");
        SuggestionResult {
            suggestion: messages::PROVIDERS_UNAVAILABLE.to_owned(),
            ingredients_used: echo(),
        }
    }
}
