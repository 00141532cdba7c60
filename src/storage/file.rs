//! File-backed storage backend.
//!
//! One file per key under a root directory, holding the value verbatim.
//! The session layer stores a single small JSON record, so there is no
//! index, no append log, no compaction: a write replaces the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::SessionStorage;

/// File-per-key store rooted at a directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> StorageResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Maps a key to its file path.
    ///
    /// Keys are restricted to a filename-safe alphabet so a key can never
    /// escape the root directory.
    fn entry_path(&self, key: &str) -> StorageResult<PathBuf> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && key != "."
            && key != "..";
        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_across_instances() {
        let tmp = TempDir::new().unwrap();

        let storage = FileStorage::open(tmp.path()).unwrap();
        storage.set("tuaran-kols-auth", "{\"isLoggedIn\":true}").unwrap();

        // A second instance over the same root sees the value
        let reopened = FileStorage::open(tmp.path()).unwrap();
        assert_eq!(
            reopened.get("tuaran-kols-auth").unwrap().as_deref(),
            Some("{\"isLoggedIn\":true}")
        );
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        assert!(storage.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        storage.set("k", "v").unwrap();
        storage.delete("k").unwrap();
        storage.delete("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn test_unsafe_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", "v"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(storage.get(""), Err(StorageError::InvalidKey(_))));
    }
}
