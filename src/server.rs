// ABOUTME: HTTP server assembly and lifecycle for the recipe catalog
// ABOUTME: Builds shared state, composes routes with middleware layers and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Server
//!
//! [`AppState`] is the only shared state: the recipe store and the
//! suggestion chain, each behind an `Arc`. [`build_router`] composes every
//! route group with request-id, tracing, timeout and CORS layers, and
//! [`run`] serves the router until Ctrl-C or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Span};

use crate::config::environment::ServerConfig;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, RecipeRoutes, SearchRoutes, SuggestionRoutes};
use crate::store::RecipeStore;
use crate::suggestions::SuggestionChain;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// In-memory recipe catalog
    pub store: Arc<RecipeStore>,
    /// Provider fallback chain
    pub suggestions: Arc<SuggestionChain>,
}

impl AppState {
    /// State over an existing store and chain
    #[must_use]
    pub fn new(store: RecipeStore, suggestions: SuggestionChain) -> Self {
        Self {
            store: Arc::new(store),
            suggestions: Arc::new(suggestions),
        }
    }

    /// Seeded store and a chain built from configured credentials
    ///
    /// # Errors
    ///
    /// Returns an error if a provider HTTP client cannot be created.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let chain = SuggestionChain::from_config(&config.llm)
            .context("Failed to build suggestion providers")?;
        Ok(Self::new(RecipeStore::seeded(), chain))
    }
}

/// Compose every route group and apply the middleware stack
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecipeRoutes::routes(state.clone()))
        .merge(SearchRoutes::routes(state.clone()))
        .merge(SuggestionRoutes::routes(state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map_or(request.uri().path(), MatchedPath::as_str);
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                        info!(
                            status = %response.status().as_u16(),
                            latency_ms = %latency.as_millis(),
                            "request completed"
                        );
                    },
                ),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(setup_cors(config))
}

/// Bind, serve and wait for a shutdown signal
///
/// # Errors
///
/// Returns an error if the state cannot be built, the address cannot be
/// bound, or the server fails while running.
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Server listening on {}", listener.local_addr()?);
    info!("API health check at http://{}/api/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
