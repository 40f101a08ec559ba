use chrono::{DateTime, Utc};
use corkboard_core::UserId;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BoardId = Uuid;

/// Default join-code length; configurable via `AppConfig`.
pub const JOIN_CODE_LEN: usize = 16;

/// A tenant-scoped kanban workspace.
///
/// The board is the ownership root: deleting or resetting one must also take
/// its members, lists and cards with it (orchestrated in the commands layer,
/// there is no implicit cascade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub created_by: UserId,
    pub join_code: String,
    pub created_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: String, created_by: UserId, join_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_by,
            join_code,
            created_at: Utc::now(),
        }
    }

    /// Generate an opaque join-code candidate of `len` alphanumeric chars.
    ///
    /// Uniqueness is not guaranteed here; callers check the candidate against
    /// existing boards and regenerate on collision.
    pub fn generate_join_code(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
