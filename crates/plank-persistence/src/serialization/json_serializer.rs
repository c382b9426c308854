use plank_core::{PlankError, PlankResult};

use crate::snapshot::Snapshot;
use crate::traits::Serializer;

/// Pretty-printed JSON encoding of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer;

impl Serializer<Snapshot> for JsonSerializer {
    fn serialize(&self, data: &Snapshot) -> PlankResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| PlankError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> PlankResult<Snapshot> {
        serde_json::from_slice(bytes).map_err(|e| PlankError::Serialization(e.to_string()))
    }
}
