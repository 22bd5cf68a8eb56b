// ABOUTME: Route module organization for the recipe catalog HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the store and chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! Route module for the recipe catalog
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the store or the suggestion chain.

/// Health check route
pub mod health;
/// Recipe CRUD and statistics routes
pub mod recipes;
/// Recipe search routes
pub mod search;
/// AI suggestion routes
pub mod suggestions;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
pub use search::SearchRoutes;
pub use suggestions::SuggestionRoutes;
