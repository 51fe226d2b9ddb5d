use serde::Serialize;

/// An opaque "authenticated" marker.
///
/// Carries no identity beyond the fact that the caller presented the
/// configured secret. Inserted into request extensions by the API layer once
/// the gate admits a request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Principal;
