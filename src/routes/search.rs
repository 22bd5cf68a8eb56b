// ABOUTME: Recipe search route handlers for cuisine, ingredient, time and combined filters
// ABOUTME: Rejects missing query parameters and reports empty result sets as not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{SearchFilter, TimeFilter};
use crate::server::AppState;

/// Query for the by-cuisine search
#[derive(Debug, Deserialize)]
pub struct CuisineQuery {
    /// Cuisine to match, case-insensitive
    pub cuisine: Option<String>,
}

/// Query for the by-ingredient search
#[derive(Debug, Deserialize)]
pub struct IngredientQuery {
    /// Ingredient substring to match, case-insensitive
    pub ingredient: Option<String>,
}

/// Search routes handler
pub struct SearchRoutes;

impl SearchRoutes {
    /// Create all recipe search routes
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/recipes/search/by-cuisine",
                get(Self::handle_by_cuisine),
            )
            .route(
                "/api/recipes/search/by-ingredient",
                get(Self::handle_by_ingredient),
            )
            .route("/api/recipes/search/by-time", get(Self::handle_by_time))
            .route(
                "/api/recipes/advanced-search",
                post(Self::handle_advanced),
            )
            .with_state(state)
    }

    fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
        value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::missing_field(field))
    }

    /// Handle GET /api/recipes/search/by-cuisine
    async fn handle_by_cuisine(
        State(state): State<AppState>,
        Query(query): Query<CuisineQuery>,
    ) -> Result<Response, AppError> {
        let cuisine = Self::required(query.cuisine, "cuisine")?;
        let recipes = state.store.search_by_cuisine(&cuisine).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /api/recipes/search/by-ingredient
    async fn handle_by_ingredient(
        State(state): State<AppState>,
        Query(query): Query<IngredientQuery>,
    ) -> Result<Response, AppError> {
        let ingredient = Self::required(query.ingredient, "ingredient")?;
        let recipes = state.store.search_by_ingredient(&ingredient).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /api/recipes/search/by-time
    async fn handle_by_time(
        State(state): State<AppState>,
        Query(filter): Query<TimeFilter>,
    ) -> Result<Response, AppError> {
        let recipes = state.store.search_by_time(filter).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /api/recipes/advanced-search
    async fn handle_advanced(
        State(state): State<AppState>,
        Json(filter): Json<SearchFilter>,
    ) -> Result<Response, AppError> {
        let recipes = state.store.advanced_search(&filter).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }
}
