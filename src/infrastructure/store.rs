use crate::domain::ports::UserStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryUserStore;
use std::path::Path;

/// Builds the process-wide user store.
///
/// Without a path the store is in-memory. With a path it is RocksDB when the
/// `storage-rocksdb` feature is enabled, and in-memory (with a warning)
/// otherwise.
pub fn open_user_store(db_path: Option<&Path>) -> Result<UserStoreBox> {
    let Some(path) = db_path else {
        tracing::debug!("using in-memory user store");
        return Ok(Box::new(InMemoryUserStore::new()));
    };
    open_persistent(path)
}

#[cfg(feature = "storage-rocksdb")]
fn open_persistent(path: &Path) -> Result<UserStoreBox> {
    let store = crate::infrastructure::rocksdb::RocksDBUserStore::open(path)?;
    tracing::info!(path = %path.display(), "opened RocksDB user store");
    Ok(Box::new(store))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_persistent(path: &Path) -> Result<UserStoreBox> {
    tracing::warn!(
        path = %path.display(),
        "persistent storage requested but 'storage-rocksdb' feature is not enabled; falling back to in-memory storage"
    );
    Ok(Box::new(InMemoryUserStore::new()))
}
