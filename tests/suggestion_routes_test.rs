// ABOUTME: Integration tests for AI suggestion routes and provider fallback behavior
// ABOUTME: Uses scripted providers to exercise primary, secondary and unavailable paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::StatusCode;
use common::{get, json_request, send, test_app, two_tier_chain, unconfigured_app, ScriptedProvider};
use recipe_catalog::constants::messages;
use serde_json::json;

#[tokio::test]
async fn test_unconfigured_returns_setup_help_with_echo() {
    let app = unconfigured_app();
    let (status, body) = send(&app, get("/api/ai/suggest?ingredients=chicken,%20garlic")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestion"], messages::NOT_CONFIGURED);
    assert_eq!(body["ingredients_used"], json!(["chicken", "garlic"]));
}

#[tokio::test]
async fn test_query_tokens_are_trimmed_and_blank_dropped() {
    let primary = ScriptedProvider::answering("primary", "Garlic chicken");
    let app = test_app(two_tier_chain(
        primary.clone(),
        ScriptedProvider::failing("secondary"),
    ));

    let (status, body) = send(&app, get("/api/ai/suggest?ingredients=%20chicken%20,,garlic,%20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestion"], "Garlic chicken");
    assert_eq!(body["ingredients_used"], json!(["chicken", "garlic"]));
    assert_eq!(primary.calls(), 1);
}

#[tokio::test]
async fn test_empty_query_is_bad_request() {
    let app = unconfigured_app();

    let (status, body) = send(&app, get("/api/ai/suggest?ingredients=%20,%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, _) = send(&app, get("/api/ai/suggest")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_body_tokens() {
    let app = test_app(two_tier_chain(
        ScriptedProvider::answering("primary", "Butter Chicken"),
        ScriptedProvider::failing("secondary"),
    ));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/ai/suggest", &json!(["Butter Chicken"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestion"], "Butter Chicken");
    assert_eq!(body["ingredients_used"], json!(["Butter Chicken"]));

    let (status, _) = send(&app, json_request("POST", "/api/ai/suggest", &json!([]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_primary_failure_falls_back_to_secondary() {
    let primary = ScriptedProvider::failing("primary");
    let secondary = ScriptedProvider::answering("secondary", "Simple garlic chicken");
    let app = test_app(two_tier_chain(primary.clone(), secondary.clone()));

    let (status, body) = send(&app, get("/api/ai/suggest?ingredients=chicken,garlic")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestion"], "Simple garlic chicken");
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test]
async fn test_all_providers_failing_is_still_ok() {
    let app = test_app(two_tier_chain(
        ScriptedProvider::failing("primary"),
        ScriptedProvider::failing("secondary"),
    ));

    let (status, body) = send(&app, get("/api/ai/suggest?ingredients=chicken")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestion"], messages::PROVIDERS_UNAVAILABLE);
    assert_eq!(body["ingredients_used"], json!(["chicken"]));
}

#[tokio::test]
async fn test_providers_listing() {
    let app = test_app(two_tier_chain(
        ScriptedProvider::answering("primary", "x"),
        ScriptedProvider::answering("secondary", "y"),
    ));
    let (status, body) = send(&app, get("/api/ai/providers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["configured"], true);
    assert_eq!(body["providers"][0]["name"], "primary");
    assert_eq!(body["providers"][0]["position"], 1);
    assert_eq!(body["providers"][1]["name"], "secondary");

    let (_, body) = send(&unconfigured_app(), get("/api/ai/providers")).await;
    assert_eq!(body["configured"], false);
    assert_eq!(body["providers"], json!([]));
}
