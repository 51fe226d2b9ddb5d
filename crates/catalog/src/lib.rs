//! `storefront-catalog` — the product domain.
//!
//! This crate contains **pure domain** logic (no I/O, no framework concerns):
//! the `Product` entity, its draft input type, and the validator that is the
//! only way to construct a `Product`.

pub mod product;
pub mod validate;

pub use product::{Product, ProductDraft};
pub use validate::{ValidationError, Violation, NAME_MAX_CHARS, NAME_MIN_CHARS, PRICE_FLOOR};
