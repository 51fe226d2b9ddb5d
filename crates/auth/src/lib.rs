//! `storefront-auth` — request admission via a shared static secret.
//!
//! A single global check: every protected route applies the same predicate,
//! independent of the entity being accessed. There are no roles, scopes, or
//! per-user identities.

pub mod gate;
pub mod principal;

pub use gate::{AccessError, ApiKeyGate};
pub use principal::Principal;
