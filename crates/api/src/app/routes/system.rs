use axum::{Json, extract::Extension, response::IntoResponse};

use storefront_auth::Principal;

/// Liveness probe; deliberately outside the gate.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Echoes the admission decision back to an authenticated caller.
pub async fn session(Extension(_principal): Extension<Principal>) -> impl IntoResponse {
    Json(serde_json::json!({ "authenticated": true }))
}

#[cfg(feature = "postgres")]
pub async fn database_ping(
    Extension(services): Extension<std::sync::Arc<crate::app::services::AppServices>>,
) -> axum::response::Response {
    match services.ping_database().await {
        Ok(()) => Json(serde_json::json!({ "status": "ok" })).into_response(),
        Err(e) => crate::app::errors::store_error_to_response(e),
    }
}
