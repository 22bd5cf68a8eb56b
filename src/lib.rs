// ABOUTME: Main library entry point for the Smart Recipe Explorer API
// ABOUTME: In-memory recipe catalog with search plus LLM-backed recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

#![deny(unsafe_code)]

//! # Recipe Catalog
//!
//! An HTTP service holding a small recipe catalog in memory. Recipes can be
//! created, read, replaced, deleted and searched by cuisine, ingredient,
//! preparation/cooking time or a combined filter. A suggestion endpoint asks
//! an LLM for a recipe from free-text ingredients or a dish name, trying Groq
//! first and Hugging Face second, and falls back to a fixed message when
//! neither answers.
//!
//! ## Architecture
//!
//! - **Store**: `RecipeStore`, the process-lifetime catalog behind a lock
//! - **LLM**: `LlmProvider` trait with Groq and Hugging Face implementations
//! - **Suggestions**: ordered provider fallback chain
//! - **Routes**: thin axum handlers grouped by domain
//! - **Config**: environment-driven `ServerConfig`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_catalog::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     recipe_catalog::server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and implementations
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Recipe data models and validation
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// In-memory recipe store
pub mod store;

/// Suggestion provider fallback chain
pub mod suggestions;
