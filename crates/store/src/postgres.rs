//! Postgres-backed product store.
//!
//! Rows are rehydrated through [`Product::validate`], so the catalog
//! invariant holds for persisted data too: a row edited out-of-band into an
//! invalid state surfaces as [`StoreError::Corrupt`] instead of leaking an
//! unvalidated product into the process.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use storefront_catalog::{Product, ProductDraft};

use crate::{ProductId, ProductRecord, StoreError};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id         SERIAL PRIMARY KEY,
    name       TEXT NOT NULL,
    price      DOUBLE PRECISION NOT NULL,
    in_stock   BOOLEAN,
    discount   DOUBLE PRECISION,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const RECORD_COLUMNS: &str = "id, name, price, in_stock, discount, created_at, updated_at";

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Create the `products` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!("products table ensured");
        Ok(())
    }

    /// Connectivity probe (`SELECT 1`).
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn create(&self, product: Product) -> Result<ProductRecord, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO products (name, price, in_stock, discount) \
             VALUES ($1, $2, $3, $4) RETURNING {RECORD_COLUMNS}"
        ))
        .bind(product.name())
        .bind(product.price())
        .bind(product.in_stock())
        .bind(product.discount())
        .fetch_one(&self.pool)
        .await?;

        row_to_record(&row)
    }

    pub async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_u32() as i32)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    /// First record whose name matches exactly, lowest id wins.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ProductRecord>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM products WHERE name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    pub async fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_record).collect()
    }

    pub async fn update(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<ProductRecord, StoreError> {
        let row = sqlx::query(&format!(
            "UPDATE products SET name = $2, price = $3, in_stock = $4, discount = $5, \
             updated_at = now() WHERE id = $1 RETURNING {RECORD_COLUMNS}"
        ))
        .bind(id.as_u32() as i32)
        .bind(product.name())
        .bind(product.price())
        .bind(product.in_stock())
        .bind(product.discount())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_record(&row),
            None => Err(StoreError::NotFound),
        }
    }

    pub async fn remove(&self, id: ProductId) -> Result<ProductRecord, StoreError> {
        let row = sqlx::query(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {RECORD_COLUMNS}"
        ))
        .bind(id.as_u32() as i32)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_record(&row),
            None => Err(StoreError::NotFound),
        }
    }
}

fn row_to_record(row: &PgRow) -> Result<ProductRecord, StoreError> {
    let id: i32 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let price: f64 = row.try_get("price")?;
    let in_stock: Option<bool> = row.try_get("in_stock")?;
    let discount: Option<f64> = row.try_get("discount")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    let product = Product::validate(ProductDraft {
        name,
        price,
        in_stock,
        discount,
    })
    .map_err(|e| {
        tracing::warn!(row_id = id, "persisted row failed rehydration: {e}");
        StoreError::Corrupt(e.to_string())
    })?;

    Ok(ProductRecord {
        id: ProductId::new(id as u32),
        product,
        created_at,
        updated_at,
    })
}
