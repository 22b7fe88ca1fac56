use crate::types::DbId;

/// Domain error taxonomy.
///
/// `NotFound` and `Validation` are expected negative outcomes surfaced
/// directly to the caller; `DuplicateKey` signals a uniqueness violation
/// detected before or at commit time; `Persistence` is a store-level
/// failure. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}
