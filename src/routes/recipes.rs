// ABOUTME: Recipe CRUD and catalog statistics route handlers
// ABOUTME: Validates recipe bodies and maps store results to HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! Recipe CRUD routes
//!
//! Handlers are thin: bodies are validated through
//! [`RecipeInput::validate`] and everything else is delegated to the
//! [`RecipeStore`](crate::store::RecipeStore).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::{MessageResponse, RecipeId, RecipeInput};
use crate::server::AppState;

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create recipe CRUD and stats routes
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/recipes/:id",
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .delete(Self::handle_delete),
            )
            .route("/api/stats", get(Self::handle_stats))
            .with_state(state)
    }

    /// Handle GET /api/recipes - List every recipe in insertion order
    async fn handle_list(State(state): State<AppState>) -> Response {
        let recipes = state.store.list().await;
        (StatusCode::OK, Json(recipes)).into_response()
    }

    /// Handle GET /api/recipes/:id - Get a single recipe
    async fn handle_get(
        State(state): State<AppState>,
        Path(id): Path<RecipeId>,
    ) -> Result<Response, AppError> {
        let recipe = state.store.get(id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /api/recipes - Create a recipe
    async fn handle_create(
        State(state): State<AppState>,
        Json(input): Json<RecipeInput>,
    ) -> Result<Response, AppError> {
        input.validate()?;
        let recipe = state.store.create(input).await;
        info!(recipe.id = recipe.id, recipe.name = %recipe.name, "Recipe created");
        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Handle PUT /api/recipes/:id - Replace every field except the id
    async fn handle_replace(
        State(state): State<AppState>,
        Path(id): Path<RecipeId>,
        Json(input): Json<RecipeInput>,
    ) -> Result<Response, AppError> {
        input.validate()?;
        let recipe = state.store.replace(id, input).await?;
        info!(recipe.id = id, "Recipe updated");
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle DELETE /api/recipes/:id - Delete a recipe
    async fn handle_delete(
        State(state): State<AppState>,
        Path(id): Path<RecipeId>,
    ) -> Result<Response, AppError> {
        let message = state.store.delete(id).await?;
        info!(recipe.id = id, "Recipe deleted");
        Ok((StatusCode::OK, Json(MessageResponse { message })).into_response())
    }

    /// Handle GET /api/stats - Aggregate catalog statistics
    async fn handle_stats(State(state): State<AppState>) -> Response {
        (StatusCode::OK, Json(state.store.stats().await)).into_response()
    }
}
