use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use thiserror::Error;

/// Fixed key the custom countdown collection is persisted under.
pub const STORAGE_KEY: &str = "soonur_custom_countdowns";

#[derive(Debug, Error)]
pub enum StorageError {
    /// No usable storage location on this system.
    #[error("no storage location available")]
    Unavailable,
    #[error("failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    /// Covers quota exhaustion and unwritable locations alike.
    #[error("failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Keyed blob storage behind the custom countdown store.
///
/// One payload per key, replaced wholesale on every write. Injectable so
/// tests can substitute doubles and consumers can relocate the data.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    /// The payload stored under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`. Either the full new payload
    /// is committed or the previous one stays intact.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// File-per-key storage in a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the platform data directory for this application.
    pub fn in_default_location() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "soonur").ok_or(StorageError::Unavailable)?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StorageError::Read {
                key: key.to_string(),
                source,
            })
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write to a sibling temp file and rename over the target, so a
        // failed write leaves the previous snapshot intact.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, payload).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }
}

/// In-memory storage for tests and ephemeral sessions. Clones share the
/// same underlying map, which lets a test inspect what a store persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a payload, e.g. a corrupt blob for failure-path tests.
    pub fn seed(&self, key: &str, payload: &str) {
        self.blobs
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), payload.to_string());
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .blobs
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.blobs
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read(STORAGE_KEY).unwrap().is_none());

        storage.write(STORAGE_KEY, "[]").unwrap();
        assert_eq!(storage.read(STORAGE_KEY).unwrap().as_deref(), Some("[]"));

        storage.write(STORAGE_KEY, "[{\"x\":1}]").unwrap();
        assert_eq!(
            storage.read(STORAGE_KEY).unwrap().as_deref(),
            Some("[{\"x\":1}]")
        );
    }

    #[test]
    fn test_file_storage_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("soonur");
        let storage = FileStorage::new(&nested);

        storage.write(STORAGE_KEY, "[]").unwrap();
        assert!(nested.join(format!("{}.json", STORAGE_KEY)).exists());
    }

    #[test]
    fn test_write_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write(STORAGE_KEY, "[]").unwrap();
        assert!(!dir
            .path()
            .join(format!("{}.json.tmp", STORAGE_KEY))
            .exists());
    }

    #[test]
    fn test_memory_storage_clones_share_blobs() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.write(STORAGE_KEY, "[1,2,3]").unwrap();
        assert_eq!(
            observer.read(STORAGE_KEY).unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }
}
