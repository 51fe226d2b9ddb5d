use axum::{Router, routing::get};

pub mod products;
pub mod system;

/// Router for everything behind the access gate.
pub fn router() -> Router {
    let router = Router::new()
        .route("/api/v1/session", get(system::session))
        .nest("/api/v1/products", products::router());

    #[cfg(feature = "postgres")]
    let router = router.route("/api/v1/database", get(system::database_ping));

    router
}
