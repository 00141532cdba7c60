//! Storage error types.
//!
//! Callers above the storage seam treat every one of these as "no usable
//! value": a failed read degrades to an absent record, a failed write to an
//! unpersisted but otherwise valid session.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from the durable key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A writer panicked while holding the store lock
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// Key cannot be mapped to a storage location
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}
