use crate::error::{StorageError, StorageResult};
use crate::models::ContactStore;
use crate::repositories::traits::SnapshotRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    contacts: &'a ContactStore,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    #[serde(default)]
    contacts: ContactStore,
}

/// Snapshot repository backed by a single JSON file.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the target,
/// so the previous snapshot survives a failed write.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl SnapshotRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<ContactStore> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No snapshot at {}, starting with an empty address book",
                    self.path.display()
                );
                return Ok(ContactStore::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let snapshot: SnapshotIn = serde_json::from_slice(&bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        info!(
            "Loaded {} contacts from {}",
            snapshot.contacts.len(),
            self.path.display()
        );
        Ok(snapshot.contacts)
    }

    async fn save(&self, store: &ContactStore) -> StorageResult<()> {
        let snapshot = SnapshotOut {
            version: SNAPSHOT_VERSION,
            contacts: store,
        };
        let json = serde_json::to_vec_pretty(&snapshot)?;

        let temp = self.temp_path();
        debug!("Writing snapshot to {}", temp.display());
        fs::write(&temp, &json)
            .await
            .map_err(|e| Self::io_error(&temp, e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| Self::io_error(&self.path, e))?;

        info!("Saved {} contacts to {}", store.len(), self.path.display());
        Ok(())
    }
}
