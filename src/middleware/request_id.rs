// ABOUTME: Request ID middleware assigning a correlation ID to every HTTP request
// ABOUTME: Exposes the ID to handlers as an extension and returns it in the x-request-id header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INCOMING_ID_LEN: usize = 128;

tokio::task_local! {
    static CURRENT_REQUEST_ID: RequestId;
}

/// ID of the request being handled on this task, if any
#[must_use]
pub fn current_request_id() -> Option<RequestId> {
    CURRENT_REQUEST_ID.try_with(Clone::clone).ok()
}

/// Correlation ID for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Fresh UUID v4 request ID
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the ID as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_incoming(value: &HeaderValue) -> Option<Self> {
        let raw = value.to_str().ok()?.trim();
        (!raw.is_empty() && raw.len() <= MAX_INCOMING_ID_LEN).then(|| Self(raw.to_owned()))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attach a request ID, run the request inside a span carrying it, and echo it back
///
/// A usable incoming `x-request-id` is kept; otherwise a UUID v4 is generated.
/// Handlers see the ID as an extension and through [`current_request_id`].
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(RequestId::from_incoming)
        .unwrap_or_else(RequestId::generate);

    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = CURRENT_REQUEST_ID
        .scope(request_id.clone(), next.run(request))
        .instrument(span)
        .await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
