use thiserror::Error;

use crate::Principal;

/// Why a request was refused admission.
///
/// Both variants map to the same outward HTTP-403 class; only the
/// server-side reason differs, so a caller cannot distinguish a missing
/// header from a bad guess at the status-code level.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("missing credential")]
    MissingCredential,

    #[error("invalid credential")]
    InvalidCredential,
}

/// The access gate: admits or rejects a caller by shared-secret comparison.
///
/// The secret is injected at construction (loaded once at process start; no
/// hot-reload), which keeps `authorize` a pure function of
/// (credential, config).
///
/// - No IO
/// - No panics
/// - No per-resource policy (one global predicate)
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    secret: String,
}

impl ApiKeyGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Decide whether a request may proceed.
    ///
    /// The presented key must equal the configured secret byte-for-byte
    /// (case-sensitive). Rejections are always reported, never dropped.
    pub fn authorize(&self, presented: Option<&str>) -> Result<Principal, AccessError> {
        match presented {
            None => Err(AccessError::MissingCredential),
            Some(key) if key.as_bytes() == self.secret.as_bytes() => Ok(Principal),
            Some(_) => Err(AccessError::InvalidCredential),
        }
    }
}
