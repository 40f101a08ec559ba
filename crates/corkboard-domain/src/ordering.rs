//! Dense-position ordering helpers.
//!
//! Both lists-within-a-board and cards-within-a-list are displayed in
//! (position, id) order. Mutations recompute an authoritative dense 0..n-1
//! sequence instead of using fractional positions; list sizes are
//! kanban-scale, so rewriting every sibling's position per move is cheap and
//! keeps the invariant trivial to state.

use crate::{
    board::BoardId,
    card::{Card, CardId},
    list::{List, ListId},
};

/// Card ids of one list, in display order (position, then id as tiebreak).
pub fn card_sequence(cards: &[Card], board_id: BoardId, list_id: ListId) -> Vec<CardId> {
    let mut seq: Vec<(i32, CardId)> = cards
        .iter()
        .filter(|c| c.board_id == board_id && c.list_id == list_id)
        .map(|c| (c.position, c.id))
        .collect();
    seq.sort();
    seq.into_iter().map(|(_, id)| id).collect()
}

/// List ids of one board, in display order.
pub fn list_sequence(lists: &[List], board_id: BoardId) -> Vec<ListId> {
    let mut seq: Vec<(i32, ListId)> = lists
        .iter()
        .filter(|l| l.board_id == board_id)
        .map(|l| (l.position, l.id))
        .collect();
    seq.sort();
    seq.into_iter().map(|(_, id)| id).collect()
}

/// Next append position for a card in a list: max(position) + 1, or 0.
pub fn next_card_position(cards: &[Card], board_id: BoardId, list_id: ListId) -> i32 {
    cards
        .iter()
        .filter(|c| c.board_id == board_id && c.list_id == list_id)
        .map(|c| c.position)
        .max()
        .map_or(0, |max| max + 1)
}

/// Next append position for a list in a board.
pub fn next_list_position(lists: &[List], board_id: BoardId) -> i32 {
    lists
        .iter()
        .filter(|l| l.board_id == board_id)
        .map(|l| l.position)
        .max()
        .map_or(0, |max| max + 1)
}

/// Stamp the lists named by `order` with dense positions 0..n-1.
pub fn resequence_lists(lists: &mut [List], order: &[ListId]) {
    for (idx, list_id) in order.iter().enumerate() {
        if let Some(list) = lists.iter_mut().find(|l| l.id == *list_id) {
            list.position = idx as i32;
        }
    }
}

/// Stamp the cards named by `order` with dense positions 0..n-1 and the given
/// list id. Stamping the list id is idempotent for cards already in the list
/// and attaches a card that just moved in.
pub fn resequence_cards(cards: &mut [Card], order: &[CardId], list_id: ListId) {
    for (idx, card_id) in order.iter().enumerate() {
        if let Some(card) = cards.iter_mut().find(|c| c.id == *card_id) {
            card.list_id = list_id;
            card.position = idx as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn card_at(board_id: BoardId, list_id: ListId, position: i32) -> Card {
        Card::new(board_id, list_id, format!("card {position}"), position)
    }

    #[test]
    fn test_sequence_orders_by_position_then_id() {
        let board_id = Uuid::new_v4();
        let list_id = Uuid::new_v4();
        let mut a = card_at(board_id, list_id, 1);
        let b = card_at(board_id, list_id, 0);
        // Force a position collision; the id tiebreak keeps ordering total.
        a.position = 0;
        let expected_first = if a.id < b.id { a.id } else { b.id };

        let seq = card_sequence(&[a.clone(), b.clone()], board_id, list_id);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0], expected_first);
    }

    #[test]
    fn test_sequence_is_tenant_scoped() {
        let board_id = Uuid::new_v4();
        let list_id = Uuid::new_v4();
        let ours = card_at(board_id, list_id, 0);
        let foreign = card_at(Uuid::new_v4(), list_id, 0);

        let seq = card_sequence(&[ours.clone(), foreign], board_id, list_id);
        assert_eq!(seq, vec![ours.id]);
    }

    #[test]
    fn test_next_position_appends() {
        let board_id = Uuid::new_v4();
        let list_id = Uuid::new_v4();
        assert_eq!(next_card_position(&[], board_id, list_id), 0);

        let cards = vec![card_at(board_id, list_id, 0), card_at(board_id, list_id, 4)];
        // Gaps are allowed between reorders; append still lands past the max.
        assert_eq!(next_card_position(&cards, board_id, list_id), 5);
    }

    #[test]
    fn test_resequence_closes_gaps_and_stamps_list() {
        let board_id = Uuid::new_v4();
        let list_a = Uuid::new_v4();
        let list_b = Uuid::new_v4();
        let mut cards = vec![
            card_at(board_id, list_a, 3),
            card_at(board_id, list_a, 7),
            card_at(board_id, list_b, 0),
        ];
        let order = card_sequence(&cards, board_id, list_a);

        resequence_cards(&mut cards, &order, list_a);

        let positions: Vec<i32> = order
            .iter()
            .map(|id| cards.iter().find(|c| c.id == *id).unwrap().position)
            .collect();
        assert_eq!(positions, vec![0, 1]);
        // The other list was untouched.
        assert_eq!(cards[2].position, 0);
        assert_eq!(cards[2].list_id, list_b);
    }
}
