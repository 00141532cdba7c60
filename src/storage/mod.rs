//! Durable client-side storage
//!
//! A narrow key-value text store scoped to the client context. The session
//! layer only ever touches a single fixed key, so the whole persistence
//! surface is `get`/`set`/`delete`; keeping it this thin lets the session
//! logic run against an in-memory backend in tests.
//!
//! # Invariants Enforced
//!
//! - `get` on a missing key is `Ok(None)`, never an error
//! - `delete` is idempotent (removing a missing key succeeds)
//! - `set` replaces the prior value wholesale

mod errors;
mod file;
mod memory;

pub use errors::{StorageError, StorageResult};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key-value text store scoped to the client context.
pub trait SessionStorage: Send + Sync {
    /// Reads the value under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value under `key`. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}
