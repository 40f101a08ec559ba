use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corkboard_core::BoardResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Metadata recorded with every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// ID of the process instance that performed the save.
    pub instance_id: Uuid,
    /// When this data was saved.
    pub saved_at: DateTime<Utc>,
    /// Schema version of the payload.
    pub schema_version: String,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            instance_id,
            saved_at: Utc::now(),
            schema_version: "1.0.0".to_string(),
        }
    }
}

/// Point-in-time snapshot of all data that needs to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Raw JSON bytes representing all boards, members, lists and cards.
    pub data: Vec<u8>,
    pub metadata: PersistenceMetadata,
}

/// Abstract storage operations.
///
/// The store persists whole snapshots; callers keep the working set in
/// memory and write one snapshot per committed operation, which is what
/// makes each operation an all-or-nothing unit on disk.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a snapshot to the store.
    async fn save(&self, snapshot: StoreSnapshot) -> BoardResult<PersistenceMetadata>;

    /// Load the current snapshot from the store.
    async fn load(&self) -> BoardResult<(StoreSnapshot, PersistenceMetadata)>;

    /// Check if the store file exists.
    async fn exists(&self) -> bool;

    /// Get the path to the store file.
    fn path(&self) -> &Path;
}
