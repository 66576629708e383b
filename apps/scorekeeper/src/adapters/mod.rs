//! Adapters for external dependencies.

pub mod file_store;
pub mod memory_store;

use tracing::info;

use crate::config::storage::{StorageConfig, StoreKind};
use crate::repos::KeyValueStore;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Store selected by configuration.
pub fn open_store(config: &StorageConfig) -> Box<dyn KeyValueStore> {
    match config.kind {
        StoreKind::File => {
            let path = config.store_path();
            info!(path = %path.display(), "Using file store");
            Box::new(FileStore::new(path))
        }
        StoreKind::Memory => {
            info!("Using in-memory store");
            Box::new(MemoryStore::new())
        }
    }
}
