//! Consistent error responses.
//!
//! Every error body has the shape `{"detail": <string-or-list>}`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_auth::AccessError;
use storefront_catalog::ValidationError;
use storefront_store::StoreError;

pub fn json_detail(status: StatusCode, detail: serde_json::Value) -> axum::response::Response {
    (status, axum::Json(json!({ "detail": detail }))).into_response()
}

/// Gate rejections: always 403, whichever of the two reasons applied.
pub fn access_error_to_response(err: AccessError) -> axum::response::Response {
    json_detail(StatusCode::FORBIDDEN, json!(err.to_string()))
}

/// Validation failures: 422 with one entry per violated field.
pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    json_detail(StatusCode::UNPROCESSABLE_ENTITY, json!(err.violations()))
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_detail(StatusCode::NOT_FOUND, json!("product not found")),
        other => json_detail(StatusCode::INTERNAL_SERVER_ERROR, json!(other.to_string())),
    }
}
