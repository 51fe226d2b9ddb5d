use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use storefront_auth::ApiKeyGate;

use crate::app::errors;

/// Header the credential is extracted from.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<ApiKeyGate>,
}

/// Run the access gate before any handler logic.
///
/// On success the [`storefront_auth::Principal`] marker is inserted into
/// request extensions; on failure the request is rejected with 403 and never
/// reaches validation or storage.
pub async fn require_api_key(
    State(state): State<GateState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match state.gate.authorize(presented_key(req.headers())) {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(e) => errors::access_error_to_response(e),
    }
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    // A header that is present but not valid UTF-8 cannot equal the secret;
    // surface it as an invalid (empty) credential rather than a missing one.
    headers
        .get(API_KEY_HEADER)
        .map(|v| v.to_str().unwrap_or(""))
}
