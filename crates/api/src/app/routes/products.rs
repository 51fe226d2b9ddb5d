use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use storefront_catalog::{Product, ProductDraft};
use storefront_store::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(remove_product),
        )
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<ProductDraft>,
) -> axum::response::Response {
    let product = match Product::validate(draft) {
        Ok(p) => p,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match services.create(product).await {
        Ok(record) => {
            tracing::info!(id = record.id.as_u32(), "product created");
            (StatusCode::CREATED, Json(dto::record_to_json(&record))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list().await {
        Ok(records) => {
            let items: Vec<_> = records.iter().map(dto::record_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ProductId>,
) -> axum::response::Response {
    match services.get(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(dto::record_to_json(&record))).into_response(),
        Ok(None) => errors::json_detail(StatusCode::NOT_FOUND, "product not found".into()),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Read by exact name. Registered on the public router: this route is
/// explicitly exempt from the gate, unlike every other product route.
pub async fn get_product_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.get_by_name(&name).await {
        Ok(Some(record)) => (StatusCode::OK, Json(dto::record_to_json(&record))).into_response(),
        Ok(None) => errors::json_detail(StatusCode::NOT_FOUND, "product not found".into()),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ProductId>,
    Json(draft): Json<ProductDraft>,
) -> axum::response::Response {
    let product = match Product::validate(draft) {
        Ok(p) => p,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match services.update(id, product).await {
        Ok(record) => {
            tracing::info!(id = record.id.as_u32(), "product updated");
            (StatusCode::OK, Json(dto::record_to_json(&record))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<ProductId>,
) -> axum::response::Response {
    match services.remove(id).await {
        Ok(record) => {
            tracing::info!(id = record.id.as_u32(), "product removed");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "deleted": dto::record_to_json(&record) })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
