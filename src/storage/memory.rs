//! In-memory storage backend.
//!
//! Backs tests and hosts that want an ephemeral session (nothing survives
//! a client restart).

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::{StorageError, StorageResult};
use super::SessionStorage;

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        storage.delete("k").unwrap();
        storage.delete("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }
}
