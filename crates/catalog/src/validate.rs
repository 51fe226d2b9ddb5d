//! Field-level validation outcome types.

use serde::Serialize;
use thiserror::Error;

/// Minimum product name length, in characters (inclusive).
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum product name length, in characters (inclusive).
pub const NAME_MAX_CHARS: usize = 12;

/// Prices must be strictly greater than this value.
pub const PRICE_FLOOR: f64 = 1.0;

/// A single field/reason pair describing why validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub reason: &'static str,
}

/// One or more field-level violations.
///
/// Carries every violated constraint, not just the first, so a caller can
/// render a complete correction list instead of forcing a retry loop.
/// Always recoverable: correct the input and resubmit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any violation names the given field.
    pub fn violates(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}
