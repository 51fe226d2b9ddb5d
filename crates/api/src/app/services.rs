//! Storage backend wiring.
//!
//! The backend is chosen once at startup from the environment, mirroring the
//! process-wide configuration model: `USE_POSTGRES=true` plus `DATABASE_URL`
//! selects the persistent store; anything else gets the seeded in-memory one.

use storefront_catalog::Product;
use storefront_store::{MemoryProductStore, ProductId, ProductRecord, StoreError};

#[cfg(feature = "postgres")]
use storefront_store::PgProductStore;

pub enum AppServices {
    InMemory {
        store: MemoryProductStore,
    },
    #[cfg(feature = "postgres")]
    Postgres {
        store: PgProductStore,
    },
}

pub async fn build_services() -> AppServices {
    let use_postgres = std::env::var("USE_POSTGRES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_postgres {
        #[cfg(feature = "postgres")]
        {
            return build_postgres_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_POSTGRES=true but postgres feature not enabled, falling back to in-memory"
            );
        }
    }

    AppServices::InMemory {
        store: MemoryProductStore::seeded(),
    }
}

#[cfg(feature = "postgres")]
async fn build_postgres_services() -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_POSTGRES=true");

    let store = PgProductStore::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");
    store
        .ensure_schema()
        .await
        .expect("failed to ensure products schema");

    AppServices::Postgres { store }
}

impl AppServices {
    pub async fn create(&self, product: Product) -> Result<ProductRecord, StoreError> {
        match self {
            AppServices::InMemory { store } => Ok(store.create(product)),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.create(product).await,
        }
    }

    pub async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        match self {
            AppServices::InMemory { store } => Ok(store.get(id)),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.get(id).await,
        }
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<ProductRecord>, StoreError> {
        match self {
            AppServices::InMemory { store } => Ok(store.get_by_name(name)),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.get_by_name(name).await,
        }
    }

    pub async fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        match self {
            AppServices::InMemory { store } => Ok(store.list()),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.list().await,
        }
    }

    pub async fn update(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<ProductRecord, StoreError> {
        match self {
            AppServices::InMemory { store } => store.update(id, product),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.update(id, product).await,
        }
    }

    pub async fn remove(&self, id: ProductId) -> Result<ProductRecord, StoreError> {
        match self {
            AppServices::InMemory { store } => store.remove(id),
            #[cfg(feature = "postgres")]
            AppServices::Postgres { store } => store.remove(id).await,
        }
    }

    #[cfg(feature = "postgres")]
    pub async fn ping_database(&self) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { .. } => {
                Err(StoreError::Backend("no database configured".to_string()))
            }
            AppServices::Postgres { store } => store.ping().await,
        }
    }
}
