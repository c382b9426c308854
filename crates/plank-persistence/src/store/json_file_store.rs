use plank_core::{PlankError, PlankResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::snapshot::Snapshot;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore};

const FORMAT_VERSION: u32 = 1;

/// JSON file-backed persistence store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around the snapshot payload.
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: PersistenceMetadata,
    data: Snapshot,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, snapshot: &Snapshot) -> PlankResult<PersistenceMetadata> {
        let metadata = PersistenceMetadata::new(FORMAT_VERSION, self.instance_id);
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: metadata.clone(),
            data: snapshot.clone(),
        };

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| PlankError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!("saved {} bytes to {}", json_bytes.len(), self.path.display());

        Ok(metadata)
    }

    async fn load(&self) -> PlankResult<(Snapshot, PersistenceMetadata)> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;

        let envelope: JsonEnvelope = serde_json::from_slice(&file_bytes)
            .map_err(|e| PlankError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(PlankError::Serialization(format!(
                "unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok((envelope.data, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
