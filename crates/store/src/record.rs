use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::Product;

use crate::ProductId;

/// A product together with its store-assigned identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub product: Product,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
