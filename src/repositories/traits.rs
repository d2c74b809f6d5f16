use crate::error::StorageResult;
use crate::models::ContactStore;
use async_trait::async_trait;

/// Repository for the address book snapshot.
///
/// The whole store is read once at startup and written once at shutdown,
/// enabling different implementations (JSON file, in-memory mock).
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Load the saved store, or an empty one if nothing was saved yet.
    async fn load(&self) -> StorageResult<ContactStore>;

    /// Replace the saved snapshot with `store`.
    async fn save(&self, store: &ContactStore) -> StorageResult<()>;
}
