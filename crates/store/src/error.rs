use thiserror::Error;

/// Storage-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists under the given identity.
    #[error("product not found")]
    NotFound,

    /// A persisted row no longer satisfies the catalog constraints.
    #[error("stored row violates product constraints: {0}")]
    Corrupt(String),

    /// The storage backend failed (connection, query, etc).
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}
