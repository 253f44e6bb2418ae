use thiserror::Error;

use crate::domain::error::MappingError;

/// Failure reported by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be read back into a record
    #[error("corrupt {table} row: {detail}")]
    Decode { table: &'static str, detail: String },

    /// A stored enumeration value is outside the storage vocabulary
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

pub type StorageResult<T> = Result<T, StorageError>;
