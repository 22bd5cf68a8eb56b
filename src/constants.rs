// ABOUTME: System-wide constants and configuration defaults for the recipe catalog
// ABOUTME: Contains validation limits, provider defaults, env var names and static messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Constants Module
//!
//! Hardcoded defaults that environment configuration falls back to, plus the
//! static user-facing messages of the suggestion chain.

/// Service identification
pub mod service_names {
    /// Name reported by the health endpoint
    pub const SERVICE_DISPLAY_NAME: &str = "Smart Recipe Explorer API";
    /// Name used in structured logs
    pub const RECIPE_CATALOG: &str = "recipe-catalog";
}

/// Recipe data model limits
pub mod limits {
    /// Maximum recipe name length in characters
    pub const MAX_NAME_CHARS: usize = 200;
    /// Minimum instructions length in characters
    pub const MIN_INSTRUCTIONS_CHARS: usize = 10;
    /// Servings applied when a body omits the field
    pub const DEFAULT_SERVINGS: u32 = 4;
}

/// Server defaults
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Groq API key (primary provider)
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    /// Groq model override
    pub const GROQ_MODEL: &str = "GROQ_MODEL";
    /// Groq endpoint override
    pub const GROQ_BASE_URL: &str = "GROQ_BASE_URL";
    /// Groq request bound
    pub const GROQ_TIMEOUT_SECS: &str = "GROQ_TIMEOUT_SECS";
    /// Hugging Face token (secondary provider)
    pub const HF_API_KEY: &str = "HF_API_KEY";
    /// Hugging Face inference endpoint override
    pub const HF_API_URL: &str = "HF_API_URL";
    /// Hugging Face request bound
    pub const HF_TIMEOUT_SECS: &str = "HF_TIMEOUT_SECS";
}

/// Suggestion provider defaults
pub mod providers {
    /// Groq OpenAI-compatible base URL
    pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
    /// Model used for recipe suggestions
    pub const GROQ_DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
    /// Primary provider bound
    pub const GROQ_TIMEOUT_SECS: u64 = 30;
    /// Sampling temperature for the detailed prompt
    pub const GROQ_TEMPERATURE: f32 = 0.7;
    /// Output bound for the detailed prompt
    pub const GROQ_MAX_TOKENS: u32 = 1000;

    /// Hugging Face inference endpoint (Mistral 7B Instruct)
    pub const HF_API_URL: &str =
        "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.1";
    /// Model label for logging
    pub const HF_DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";
    /// Secondary provider bound
    pub const HF_TIMEOUT_SECS: u64 = 10;
    /// Text used when the inference payload has no `generated_text`
    pub const HF_MISSING_TEXT: &str = "Could not generate suggestion.";
}

/// Static messages returned by the suggestion chain
pub mod messages {
    /// Returned for an empty token list
    pub const EMPTY_INPUT: &str = "Please provide at least one ingredient or dish name.";

    /// Returned when every provider attempt failed
    pub const PROVIDERS_UNAVAILABLE: &str =
        "⚠️ AI services are temporarily unavailable. Please try again in a moment.";

    /// Returned when no provider credential is configured
    pub const NOT_CONFIGURED: &str = "🚨 AI API Key Not Configured!

To use AI recipe suggestions:

1. Get Free Groq API Key (Recommended):
   - Visit: https://console.groq.com/
   - Sign up (free, no credit card needed)
   - Copy your API key

2. Or Get Hugging Face Token:
   - Visit: https://huggingface.co/settings/tokens
   - Create a new token

3. Add to .env file:
   GROQ_API_KEY=your_key_here
   OR
   HF_API_KEY=your_token_here

4. Restart the server";
}
