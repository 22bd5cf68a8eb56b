// ABOUTME: CORS middleware configuration for the recipe catalog HTTP API
// ABOUTME: Builds a tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::request_id::REQUEST_ID_HEADER;
use crate::config::environment::ServerConfig;

/// Configure CORS for browser clients
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. `*` (the default) allows any
/// origin; otherwise only the listed origins are allowed.
///
/// ```bash
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://recipes.example.com,http://localhost:3000"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.cors_origins.is_empty()
        || config.cors_origins.iter().any(|origin| origin == "*")
    {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}
