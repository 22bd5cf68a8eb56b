// ABOUTME: LLM provider abstraction layer for recipe suggestion backends
// ABOUTME: Defines chat message/request/response types and the provider contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # LLM Provider Service Provider Interface
//!
//! This module defines the contract that suggestion backends implement. The
//! suggestion chain only ever sees `dyn LlmProvider`, so a new backend (or a
//! test double) plugs in without touching the fallback logic.
//!
//! ## Key Concepts
//!
//! - **`LlmProvider`**: Async trait for a single chat completion
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Request configuration including model, temperature, etc.
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use recipe_catalog::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("Suggest a soup")])
//!         .with_temperature(0.7)
//!         .with_max_tokens(1000);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod groq;
mod huggingface;
pub mod prompts;

pub use groq::{GroqConfig, GroqProvider};
pub use huggingface::{HuggingFaceConfig, HuggingFaceProvider};
pub use prompts::PromptStyle;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User input message
    User,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Concatenated text of every message, for completion-style endpoints
    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
///
/// Implementations must bound their own network wait; the suggestion chain
/// does not wrap calls in an extra timeout.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "groq", "huggingface")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion (non-streaming)
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ChatRequest::new(vec![ChatMessage::user("hi")])
            .with_model("llama-3.1-8b-instant")
            .with_temperature(0.7)
            .with_max_tokens(1000);
        assert_eq!(request.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert_eq!(request.max_tokens, Some(1000));
    }

    #[test]
    fn test_prompt_text_joins_messages() {
        let request = ChatRequest::new(vec![
            ChatMessage::user("You are a chef."),
            ChatMessage::user("Soup please."),
        ]);
        assert_eq!(request.prompt_text(), "You are a chef.\n\nSoup please.");
        assert_eq!(request.messages[0].role.as_str(), "user");
    }
}
