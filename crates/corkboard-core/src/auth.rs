use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = Uuid;

/// The principal an external authentication provider resolved for a request.
///
/// The core never authenticates; it consumes whatever identity the
/// transport's auth layer hands it and maps it onto its own user records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

/// Auth collaborator contract.
///
/// Returns `None` when the request carries no authenticated identity, in
/// which case handlers reject the request before touching board data.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}
