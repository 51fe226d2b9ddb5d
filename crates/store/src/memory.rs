use std::{
    collections::HashMap,
    sync::Mutex,
};

use chrono::Utc;

use storefront_catalog::{Product, ProductDraft};

use crate::{ProductId, ProductRecord, StoreError};

/// In-memory product store (dev/test default).
///
/// Identity assignment is `max(existing ids) + 1`, or 1 when empty, so an id
/// freed by deleting the highest record may be handed out again.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<HashMap<u32, ProductRecord>>,
}

/// Demo inventory: (name, price, in_stock).
const DEMO_PRODUCTS: [(&str, f64, bool); 4] = [
    ("Product 1", 24.99, true),
    ("Product 2", 19.99, false),
    ("Product 3", 14.99, true),
    ("Product 4", 59.99, true),
];

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the demo inventory.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (name, price, in_stock) in DEMO_PRODUCTS {
            let product = Product::validate(ProductDraft {
                name: name.to_string(),
                price,
                in_stock: Some(in_stock),
                discount: None,
            })
            .expect("demo product satisfies catalog constraints");
            store.create(product);
        }
        tracing::debug!(count = DEMO_PRODUCTS.len(), "seeded demo inventory");
        store
    }

    /// Insert a validated product and assign it an identity.
    pub fn create(&self, product: Product) -> ProductRecord {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.keys().max().map_or(1, |max| max + 1);
        let now = Utc::now();
        let record = ProductRecord {
            id: ProductId::new(id),
            product,
            created_at: now,
            updated_at: now,
        };
        inner.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: ProductId) -> Option<ProductRecord> {
        self.inner.lock().unwrap().get(&id.as_u32()).cloned()
    }

    /// First record whose name matches exactly, lowest id wins.
    pub fn get_by_name(&self, name: &str) -> Option<ProductRecord> {
        let inner = self.inner.lock().unwrap();
        inner
            .values()
            .filter(|r| r.product.name() == name)
            .min_by_key(|r| r.id)
            .cloned()
    }

    /// All records, ordered by id.
    pub fn list(&self) -> Vec<ProductRecord> {
        let inner = self.inner.lock().unwrap();
        let mut records: Vec<ProductRecord> = inner.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Replace a record wholesale (no partial-patch semantics).
    pub fn update(&self, id: ProductId, product: Product) -> Result<ProductRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let record = inner.get_mut(&id.as_u32()).ok_or(StoreError::NotFound)?;
        record.product = product;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    /// Remove a record, returning it.
    pub fn remove(&self, id: ProductId) -> Result<ProductRecord, StoreError> {
        self.inner
            .lock()
            .unwrap()
            .remove(&id.as_u32())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64) -> Product {
        Product::validate(ProductDraft {
            name: name.to_string(),
            price,
            in_stock: None,
            discount: None,
        })
        .unwrap()
    }

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let store = MemoryProductStore::new();
        let a = store.create(product("Widget", 2.0));
        let b = store.create(product("Gadget", 3.0));
        assert_eq!(a.id, ProductId::new(1));
        assert_eq!(b.id, ProductId::new(2));
    }

    #[test]
    fn removing_the_highest_id_allows_reuse() {
        let store = MemoryProductStore::new();
        store.create(product("Widget", 2.0));
        let b = store.create(product("Gadget", 3.0));
        store.remove(b.id).unwrap();

        let c = store.create(product("Doodad", 4.0));
        assert_eq!(c.id, b.id);
    }

    #[test]
    fn get_returns_what_create_stored() {
        let store = MemoryProductStore::new();
        let created = store.create(product("Widget", 2.0));
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_by_name_matches_exactly_and_prefers_lowest_id() {
        let store = MemoryProductStore::new();
        let first = store.create(product("Widget", 2.0));
        store.create(product("Gadget", 3.0));
        store.create(product("Widget", 9.0));

        let found = store.get_by_name("Widget").unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.get_by_name("widget").is_none());
    }

    #[test]
    fn update_replaces_wholesale_and_touches_updated_at() {
        let store = MemoryProductStore::new();
        let created = store.create(product("Widget", 2.0));

        let updated = store.update(created.id, product("Gadget", 3.5)).unwrap();
        assert_eq!(updated.product.name(), "Gadget");
        assert_eq!(updated.product.price(), 3.5);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn update_and_remove_report_missing_ids() {
        let store = MemoryProductStore::new();
        let missing = ProductId::new(999);
        assert!(matches!(
            store.update(missing, product("Widget", 2.0)),
            Err(StoreError::NotFound)
        ));
        assert!(matches!(store.remove(missing), Err(StoreError::NotFound)));
    }

    #[test]
    fn remove_returns_the_deleted_record() {
        let store = MemoryProductStore::new();
        let created = store.create(product("Widget", 2.0));
        let removed = store.remove(created.id).unwrap();
        assert_eq!(removed, created);
        assert!(store.get(created.id).is_none());
    }

    #[test]
    fn seeded_store_carries_the_demo_inventory() {
        let store = MemoryProductStore::seeded();
        let records = store.list();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].product.name(), "Product 1");
        assert_eq!(records[0].product.price(), 24.99);
        assert_eq!(records[1].product.in_stock(), Some(false));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = MemoryProductStore::new();
        for name in ["Widget", "Gadget", "Doodad"] {
            store.create(product(name, 2.0));
        }
        let ids: Vec<u32> = store.list().iter().map(|r| r.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
