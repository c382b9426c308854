use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plank_core::PlankResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::snapshot::Snapshot;

/// Metadata recorded alongside every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the on-disk format.
    pub format_version: u32,
    /// Id of the instance that performed the save.
    pub instance_id: Uuid,
    /// When the data was saved.
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(format_version: u32, instance_id: Uuid) -> Self {
        Self {
            format_version,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Abstract storage for the whole model. Implementations own the backend
/// (file today, anything else tomorrow); callers only see snapshots.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a snapshot to the store.
    async fn save(&self, snapshot: &Snapshot) -> PlankResult<PersistenceMetadata>;

    /// Load the current snapshot from the store.
    async fn load(&self) -> PlankResult<(Snapshot, PersistenceMetadata)>;

    /// Check if the store exists on disk.
    async fn exists(&self) -> bool;

    /// Path to the store file.
    fn path(&self) -> &Path;
}

/// Serialization strategy, so the encoding can be swapped without
/// touching the store.
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> PlankResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> PlankResult<T>;
}
