use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{board::BoardId, list::ListId};

pub type CardId = Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTag {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl CardTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }

    /// Parse a tag, coercing unknown values to `NotStarted`.
    ///
    /// Malformed tags from stale clients are deliberately not an error.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "not_started" => Self::NotStarted,
            "in_progress" => Self::InProgress,
            "finished" => Self::Finished,
            _ => Self::NotStarted,
        }
    }
}

/// A single task unit belonging to exactly one list.
///
/// Carries its board id as well so every lookup can stay tenant-scoped; the
/// list it references must always belong to the same board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub list_id: ListId,
    pub title: String,
    pub desc: String,
    pub tag: CardTag,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(board_id: BoardId, list_id: ListId, title: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            list_id,
            title,
            desc: String::new(),
            tag: CardTag::NotStarted,
            position,
            created_at: Utc::now(),
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new(Uuid::new_v4(), Uuid::new_v4(), "Task".to_string(), 0);
        assert_eq!(card.tag, CardTag::NotStarted);
        assert!(card.desc.is_empty());
    }

    #[test]
    fn test_tag_parse_coerces_unknown() {
        assert_eq!(CardTag::parse_or_default("in_progress"), CardTag::InProgress);
        assert_eq!(CardTag::parse_or_default("finished"), CardTag::Finished);
        assert_eq!(CardTag::parse_or_default("bogus"), CardTag::NotStarted);
        assert_eq!(CardTag::parse_or_default(""), CardTag::NotStarted);
    }

    #[test]
    fn test_tag_serde_names() {
        assert_eq!(serde_json::to_string(&CardTag::InProgress).unwrap(), "\"in_progress\"");
    }
}
