//! `storefront-store` — product storage.
//!
//! The store is the only component that assigns identity: it hands out small
//! integer keys on create and performs existence checks on read, update, and
//! delete. It accepts already-validated [`storefront_catalog::Product`]
//! values, so no record violating the catalog constraints can enter it.
//!
//! Two implementations: [`MemoryProductStore`] (default) and, behind the
//! `postgres` feature, [`PgProductStore`].

pub mod error;
pub mod id;
pub mod memory;
pub mod record;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use error::StoreError;
pub use id::ProductId;
pub use memory::MemoryProductStore;
pub use record::ProductRecord;

#[cfg(feature = "postgres")]
pub use postgres::PgProductStore;
