pub mod serialization;
pub mod snapshot;
pub mod store;
pub mod traits;

pub use serialization::JsonSerializer;
pub use snapshot::Snapshot;
pub use store::{AtomicWriter, JsonFileStore};
pub use traits::{PersistenceMetadata, PersistenceStore, Serializer};
