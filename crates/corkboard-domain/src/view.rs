//! Read-side facade: the lists+cards structure a board page renders.

use serde::Serialize;

use crate::{ordering, Board, BoardId, Card, List, ListId, Role};

#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub id: ListId,
    pub title: String,
    pub position: i32,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub board_id: BoardId,
    pub name: String,
    pub role: Role,
    pub lists: Vec<ListView>,
}

/// Case-insensitive substring match over title and description.
fn matches_search(card: &Card, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    card.title.to_lowercase().contains(&needle) || card.desc.to_lowercase().contains(&needle)
}

impl BoardView {
    /// Assemble the display structure: lists in (position, id) order, each
    /// with its cards in (position, id) order. A non-empty search narrows
    /// the returned cards without touching their stored order or positions.
    pub fn build(
        board: &Board,
        role: Role,
        lists: &[List],
        cards: &[Card],
        search: Option<&str>,
    ) -> Self {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let list_views = ordering::list_sequence(lists, board.id)
            .into_iter()
            .filter_map(|list_id| lists.iter().find(|l| l.id == list_id))
            .map(|list| {
                let cards = ordering::card_sequence(cards, board.id, list.id)
                    .into_iter()
                    .filter_map(|card_id| cards.iter().find(|c| c.id == card_id))
                    .filter(|card| search.map_or(true, |q| matches_search(card, q)))
                    .cloned()
                    .collect();
                ListView {
                    id: list.id,
                    title: list.title.clone(),
                    position: list.position,
                    cards,
                }
            })
            .collect();

        Self {
            board_id: board.id,
            name: board.name.clone(),
            role,
            lists: list_views,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn fixture() -> (Board, Vec<List>, Vec<Card>) {
        let board = Board::new("b".into(), Uuid::new_v4(), "code".into());
        let list_a = List::new(board.id, "A".into(), 1);
        let list_b = List::new(board.id, "B".into(), 0);
        let mut cards = vec![
            Card::new(board.id, list_a.id, "Excel tricks".into(), 0),
            Card::new(board.id, list_a.id, "Plain".into(), 1),
            Card::new(board.id, list_b.id, "Other".into(), 0),
        ];
        cards[2].desc = "learn excel basics".into();
        (board, vec![list_a, list_b], cards)
    }

    #[test]
    fn test_lists_ordered_by_position() {
        let (board, lists, cards) = fixture();
        let view = BoardView::build(&board, Role::Student, &lists, &cards, None);
        let titles: Vec<_> = view.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(view.lists[1].cards.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_desc() {
        let (board, lists, cards) = fixture();
        let view = BoardView::build(&board, Role::Student, &lists, &cards, Some("excel"));
        // "B" list matches via desc, "A" via title; "Plain" filtered out.
        assert_eq!(view.lists[0].cards.len(), 1);
        assert_eq!(view.lists[1].cards.len(), 1);
        assert_eq!(view.lists[1].cards[0].title, "Excel tricks");
        // Stored positions are untouched by filtering.
        assert_eq!(view.lists[1].cards[0].position, 0);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let (board, lists, cards) = fixture();
        let view = BoardView::build(&board, Role::Student, &lists, &cards, Some("   "));
        let total: usize = view.lists.iter().map(|l| l.cards.len()).sum();
        assert_eq!(total, 3);
    }
}
