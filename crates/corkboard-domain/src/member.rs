use chrono::{DateTime, Utc};
use corkboard_core::{BoardError, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::board::BoardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mentor,
    Student,
    Spectator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Mentor => "mentor",
            Self::Student => "student",
            Self::Spectator => "spectator",
        }
    }
}

impl FromStr for Role {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "mentor" => Ok(Self::Mentor),
            "student" => Ok(Self::Student),
            "spectator" => Ok(Self::Spectator),
            _ => Err(BoardError::Validation("bad_role".to_string())),
        }
    }
}

/// A user's role assignment on one board.
///
/// Exactly one membership may exist per (board, user) pair, and the board
/// creator's membership stays admin for the lifetime of the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub board_id: BoardId,
    pub user_id: UserId,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn new(board_id: BoardId, user_id: UserId, role: Role) -> Self {
        Self {
            board_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Mentor, Role::Student, Role::Spectator] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_bad_role_rejected() {
        let err = "owner".parse::<Role>().unwrap_err();
        assert_eq!(err.reason(), "bad_role");
    }
}
