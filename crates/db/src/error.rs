//! Error kinds reported by the repository layer.

use squad_builder_core::types::DbId;

/// Failure of a repository operation.
///
/// Callers distinguish a missing row from a storage failure; the API layer
/// maps the former to 404 and the latter to 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The referenced row (or key pair) does not exist.
    #[error("{entity} with {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// The database rejected or failed the operation.
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl StoreError {
    /// NotFound for a single-column integer key.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            key: format!("id {id}"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias for repository return values.
pub type StoreResult<T> = Result<T, StoreError>;
