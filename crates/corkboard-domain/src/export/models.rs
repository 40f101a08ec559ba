//! Export format models.
//!
//! Field names and nesting are a compatibility contract: clients of the
//! exported JSON rely on them, so changes here are breaking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardInfo {
    pub id: Uuid,
    pub name: String,
    pub join_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberExport {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExport {
    pub id: Uuid,
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardExport {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub desc: String,
    pub position: i32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// One immutable snapshot of a board and everything it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: BoardInfo,
    pub members: Vec<MemberExport>,
    pub lists: Vec<ListExport>,
    pub cards: Vec<CardExport>,
}
