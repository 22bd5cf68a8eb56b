// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server and provider configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors
//! Configuration module for the recipe catalog server
//!
//! - **Environment**: Server and suggestion provider configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LlmConfig, ServerConfig};
