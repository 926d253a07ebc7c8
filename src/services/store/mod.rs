mod id;
mod service;
mod storage;

pub use service::CustomCountdownStore;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError, STORAGE_KEY};
