//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: storage backend selection and access
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: JSON mapping helpers
//! - `errors.rs`: consistent `{"detail": ...}` error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_auth::ApiKeyGate;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The gate runs as middleware on the protected subtree only; `/health` and
/// the read-by-name route stay public.
pub async fn build_app(api_key: String) -> Router {
    let gate_state = middleware::GateState {
        gate: Arc::new(ApiKeyGate::new(api_key)),
    };

    let services = Arc::new(services::build_services().await);

    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        gate_state,
        middleware::require_api_key,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route(
            "/api/v1/products/name/:name",
            get(routes::products::get_product_by_name),
        )
        .merge(protected)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
