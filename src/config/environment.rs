// ABOUTME: Environment configuration management for the recipe catalog server
// ABOUTME: Parses bind address, CORS, timeouts and LLM provider credentials from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! Environment-based configuration management

use crate::constants::{defaults, env_vars, providers};
use crate::llm::{GroqConfig, HuggingFaceConfig};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type for logging and other deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Credentials and endpoints for the suggestion providers
///
/// A provider is `None` when its key is unset or empty.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Primary provider
    pub groq: Option<GroqConfig>,
    /// Secondary provider
    pub huggingface: Option<HuggingFaceConfig>,
}

impl LlmConfig {
    /// Load provider settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let groq = match env_var_opt(env_vars::GROQ_API_KEY) {
            Some(key) => {
                let mut config = GroqConfig::new(key).with_timeout(Duration::from_secs(
                    parse_env_or(env_vars::GROQ_TIMEOUT_SECS, providers::GROQ_TIMEOUT_SECS)?,
                ));
                if let Some(model) = env_var_opt(env_vars::GROQ_MODEL) {
                    config = config.with_model(model);
                }
                if let Some(base_url) = env_var_opt(env_vars::GROQ_BASE_URL) {
                    config = config.with_base_url(base_url);
                }
                Some(config)
            }
            None => None,
        };

        let huggingface = match env_var_opt(env_vars::HF_API_KEY) {
            Some(key) => {
                let mut config = HuggingFaceConfig::new(key).with_timeout(Duration::from_secs(
                    parse_env_or(env_vars::HF_TIMEOUT_SECS, providers::HF_TIMEOUT_SECS)?,
                ));
                if let Some(api_url) = env_var_opt(env_vars::HF_API_URL) {
                    config = config.with_api_url(api_url);
                }
                Some(config)
            }
            None => None,
        };

        Ok(Self { groq, huggingface })
    }

    /// Worst-case time spent walking the whole chain
    #[must_use]
    pub fn chain_timeout(&self) -> Duration {
        self.groq.as_ref().map_or(Duration::ZERO, |groq| groq.timeout)
            + self
                .huggingface
                .as_ref()
                .map_or(Duration::ZERO, |huggingface| huggingface.timeout)
    }

    fn describe(&self) -> String {
        let mut names = Vec::new();
        if self.groq.is_some() {
            names.push("groq");
        }
        if self.huggingface.is_some() {
            names.push("huggingface");
        }
        if names.is_empty() {
            "none".to_owned()
        } else {
            names.join(" -> ")
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Allowed CORS origins; `["*"]` allows any
    pub cors_origins: Vec<String>,
    /// Whole-request timeout applied by the router
    pub request_timeout: Duration,
    /// Suggestion provider settings
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::Development,
            cors_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// timeouts fail [`ServerConfig::validate`].
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        load_dotenv();

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_env_or(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            cors_origins: parse_origins(&env_var_or(
                env_vars::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            )),
            request_timeout: Duration::from_secs(parse_env_or(
                env_vars::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            )?),
            llm: LlmConfig::from_env()?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Check that the provider chain finishes inside the request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the configured provider timeouts add up to the
    /// request timeout or more.
    pub fn validate(&self) -> Result<()> {
        let chain_timeout = self.llm.chain_timeout();
        ensure!(
            chain_timeout < self.request_timeout,
            "{} + {} ({}s) must be less than {} ({}s)",
            env_vars::GROQ_TIMEOUT_SECS,
            env_vars::HF_TIMEOUT_SECS,
            chain_timeout.as_secs(),
            env_vars::REQUEST_TIMEOUT_SECS,
            self.request_timeout.as_secs(),
        );
        Ok(())
    }

    /// Address string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Catalog Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Suggestion Providers: {}",
            self.bind_address(),
            self.environment,
            self.cors_origins.join(", "),
            self.request_timeout.as_secs(),
            self.llm.describe(),
        )
    }
}

/// Load a `.env` file from the working directory or one of its parents
///
/// Variables already set in the process environment are kept. Returns the
/// path of the file that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("No .env file found or failed to load: {}", e);
            None
        }
    }
}

/// Value of `key`, treating unset and empty as absent
fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_var_or(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_owned())
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env_var_opt(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .with_context(|| format!("Invalid value for {key}: {raw}"))
    })
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("invalid"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_lists_provider_order() {
        let config = ServerConfig {
            llm: LlmConfig {
                groq: Some(GroqConfig::new("k")),
                huggingface: Some(HuggingFaceConfig::new("t")),
            },
            ..ServerConfig::default()
        };
        let summary = config.summary();
        assert!(summary.contains("127.0.0.1:8000"));
        assert!(summary.contains("groq -> huggingface"));
        assert!(!summary.contains("k\n"));
    }

    #[test]
    fn test_validate_rejects_chain_longer_than_request() {
        let mut config = ServerConfig {
            llm: LlmConfig {
                groq: Some(GroqConfig::new("k")),
                huggingface: Some(HuggingFaceConfig::new("t")),
            },
            ..ServerConfig::default()
        };
        assert_eq!(config.llm.chain_timeout(), Duration::from_secs(40));
        assert!(config.validate().is_ok());

        config.request_timeout = Duration::from_secs(40);
        assert!(config.validate().is_err());

        config.llm.huggingface = None;
        assert!(config.validate().is_ok());
    }
}
