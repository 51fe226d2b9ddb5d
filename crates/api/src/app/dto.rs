//! JSON mapping helpers.
//!
//! Request bodies deserialize straight into
//! [`storefront_catalog::ProductDraft`]; only response mapping lives here.

use storefront_store::ProductRecord;

pub fn record_to_json(record: &ProductRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id.as_u32(),
        "name": record.product.name(),
        "price": record.product.price(),
        "in_stock": record.product.in_stock(),
        "discount": record.product.discount(),
        "created_at": record.created_at.to_rfc3339(),
        "updated_at": record.updated_at.to_rfc3339(),
    })
}
