use super::{Command, CommandContext};
use crate::{ordering, Card, CardId, CardTag, ListId};
use corkboard_core::{BoardError, BoardResult};
use uuid::Uuid;

/// Append a card at the end of a list. New cards start untagged-equivalent
/// (`not_started`) with an empty description.
pub struct CreateCard {
    pub board_id: Uuid,
    pub list_id: ListId,
    pub title: String,
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let list_ok = context
            .lists
            .iter()
            .any(|l| l.board_id == self.board_id && l.id == self.list_id);
        if !list_ok {
            return Err(BoardError::NotFound("list_not_found".to_string()));
        }
        let position = ordering::next_card_position(context.cards, self.board_id, self.list_id);
        context.cards.push(Card::new(
            self.board_id,
            self.list_id,
            self.title.clone(),
            position,
        ));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.title)
    }
}

/// In-place field update. Blank titles coerce to "Untitled" and unknown tags
/// to `not_started`; stale clients get a sane card, not an error.
pub struct UpdateCard {
    pub board_id: Uuid,
    pub card_id: CardId,
    pub title: String,
    pub desc: String,
    pub tag: CardTag,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let card = context
            .cards
            .iter_mut()
            .find(|c| c.board_id == self.board_id && c.id == self.card_id)
            .ok_or_else(|| BoardError::NotFound("card_not_found".to_string()))?;
        let title = self.title.trim();
        card.title = if title.is_empty() {
            "Untitled".to_string()
        } else {
            title.to_string()
        };
        card.desc = self.desc.trim().to_string();
        card.tag = self.tag;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Delete one card, board-scoped.
pub struct DeleteCard {
    pub board_id: Uuid,
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let list_id = context
            .cards
            .iter()
            .find(|c| c.board_id == self.board_id && c.id == self.card_id)
            .map(|c| c.list_id)
            .ok_or_else(|| BoardError::NotFound("card_not_found".to_string()))?;
        context
            .cards
            .retain(|c| !(c.board_id == self.board_id && c.id == self.card_id));
        // Close the gap so sibling positions stay dense.
        let remaining = ordering::card_sequence(context.cards, self.board_id, list_id);
        ordering::resequence_cards(context.cards, &remaining, list_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Move a card to an index in a destination list, resequencing both lists to
/// dense positions.
///
/// When source and destination are the same list, the destination sequence
/// is the already-card-removed source sequence; loading it twice would
/// duplicate the card. Out-of-range indices clamp to `[0, len]`.
pub struct MoveCard {
    pub board_id: Uuid,
    pub card_id: CardId,
    pub to_list_id: ListId,
    pub to_index: i64,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let from_list_id = context
            .cards
            .iter()
            .find(|c| c.board_id == self.board_id && c.id == self.card_id)
            .map(|c| c.list_id);
        let to_list_ok = context
            .lists
            .iter()
            .any(|l| l.board_id == self.board_id && l.id == self.to_list_id);
        let from_list_id = match (from_list_id, to_list_ok) {
            (Some(id), true) => id,
            _ => return Err(BoardError::NotFound("not_found".to_string())),
        };

        let mut from_seq = ordering::card_sequence(context.cards, self.board_id, from_list_id);
        from_seq.retain(|id| *id != self.card_id);

        let mut to_seq = if from_list_id == self.to_list_id {
            from_seq.clone()
        } else {
            ordering::card_sequence(context.cards, self.board_id, self.to_list_id)
        };

        let to_index = (self.to_index.max(0) as usize).min(to_seq.len());
        to_seq.insert(to_index, self.card_id);

        // Close the gap in the source list only on cross-list moves; for an
        // in-list move the destination pass below covers every sibling.
        if from_list_id != self.to_list_id {
            ordering::resequence_cards(context.cards, &from_seq, from_list_id);
        }
        ordering::resequence_cards(context.cards, &to_seq, self.to_list_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Move card {} to list {} at {}",
            self.card_id, self.to_list_id, self.to_index
        )
    }
}
