// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports service name and current timestamp for load balancer health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! Health check routes for service monitoring

use crate::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service_names::SERVICE_DISPLAY_NAME,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/api/health", get(health_handler))
    }
}
