use corkboard_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal mirror of an identity issued by the external auth provider.
///
/// Kept so memberships and exports can render usernames; registration and
/// login stay outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
        }
    }
}
