use async_trait::async_trait;
use contact_book::error::StorageResult;
use contact_book::models::ContactStore;
use contact_book::repositories::SnapshotRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock snapshot repository for testing.
///
/// Keeps the "saved" store in memory and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotRepository {
    saved: Arc<Mutex<Option<ContactStore>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshotRepository {
    /// Create a mock with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that loads `store`.
    pub fn with_store(store: ContactStore) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(store);
        repo
    }

    /// The last saved store, if any.
    pub fn saved(&self) -> Option<ContactStore> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl SnapshotRepository for MockSnapshotRepository {
    async fn load(&self) -> StorageResult<ContactStore> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, store: &ContactStore) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.lock().unwrap() = Some(store.clone());
        Ok(())
    }
}
