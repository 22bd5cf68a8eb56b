// ABOUTME: AI recipe suggestion route handlers over the provider fallback chain
// ABOUTME: Parses ingredient tokens from query or body and lists configured providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! Suggestion routes
//!
//! Only empty input is an HTTP error here. Provider failures are absorbed by
//! the chain and come back as a 200 with an explanatory message.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::server::AppState;
use crate::suggestions::ProviderInfo;

/// Query for GET /api/ai/suggest
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Comma-separated ingredients or dish name
    pub ingredients: Option<String>,
}

/// Body of GET /api/ai/providers
#[derive(Debug, Serialize, Deserialize)]
pub struct ProvidersResponse {
    /// Whether any provider is configured
    pub configured: bool,
    /// Providers in attempt order
    pub providers: Vec<ProviderInfo>,
}

/// Split a comma-separated list, trimming and dropping blanks
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Suggestion routes handler
pub struct SuggestionRoutes;

impl SuggestionRoutes {
    /// Create suggestion routes
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/ai/suggest",
                get(Self::handle_suggest_query).post(Self::handle_suggest_body),
            )
            .route("/api/ai/providers", get(Self::handle_providers))
            .with_state(state)
    }

    async fn suggest(state: &AppState, tokens: Vec<String>) -> Result<Response, AppError> {
        if tokens.is_empty() {
            return Err(AppError::invalid_input(
                "At least one ingredient or dish name is required",
            ));
        }
        let result = state.suggestions.suggest(&tokens).await;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle GET /api/ai/suggest?ingredients=a,b
    async fn handle_suggest_query(
        State(state): State<AppState>,
        Query(query): Query<SuggestQuery>,
    ) -> Result<Response, AppError> {
        let tokens = query
            .ingredients
            .as_deref()
            .map(parse_ingredient_list)
            .unwrap_or_default();
        Self::suggest(&state, tokens).await
    }

    /// Handle POST /api/ai/suggest with a JSON array of strings
    async fn handle_suggest_body(
        State(state): State<AppState>,
        Json(tokens): Json<Vec<String>>,
    ) -> Result<Response, AppError> {
        Self::suggest(&state, tokens).await
    }

    /// Handle GET /api/ai/providers
    async fn handle_providers(State(state): State<AppState>) -> Response {
        let response = ProvidersResponse {
            configured: state.suggestions.is_configured(),
            providers: state.suggestions.providers(),
        };
        (StatusCode::OK, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_list() {
        assert_eq!(
            parse_ingredient_list(" chicken, garlic ,,  "),
            vec!["chicken".to_owned(), "garlic".to_owned()]
        );
        assert!(parse_ingredient_list(" , ").is_empty());
    }
}
