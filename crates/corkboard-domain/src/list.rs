use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;

pub type ListId = Uuid;

/// An ordered column of cards within a board.
///
/// Positions are not required to be contiguous after ad-hoc inserts, but
/// every reorder re-sequences them to a dense 0..n-1 range. Display order is
/// always (position, id) so colliding positions stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub board_id: BoardId,
    pub title: String,
    pub position: i32,
}

impl List {
    pub fn new(board_id: BoardId, title: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            position,
        }
    }
}
