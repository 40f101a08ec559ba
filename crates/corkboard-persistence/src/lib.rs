pub mod store;
pub mod traits;

pub use store::{AtomicWriter, JsonFileStore};
pub use traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot};
