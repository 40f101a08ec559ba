use super::{Command, CommandContext};
use crate::{ordering, List, ListId};
use corkboard_core::{BoardError, BoardResult};
use uuid::Uuid;

fn untitled_or(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        "Untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Append a list at the end of a board.
pub struct CreateList {
    pub board_id: Uuid,
    pub title: String,
}

impl Command for CreateList {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let position = ordering::next_list_position(context.lists, self.board_id);
        context
            .lists
            .push(List::new(self.board_id, untitled_or(&self.title), position));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create list: '{}'", self.title)
    }
}

/// Rename a list, blank titles coercing to "Untitled".
pub struct RenameList {
    pub board_id: Uuid,
    pub list_id: ListId,
    pub title: String,
}

impl Command for RenameList {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let list = context
            .lists
            .iter_mut()
            .find(|l| l.board_id == self.board_id && l.id == self.list_id)
            .ok_or_else(|| BoardError::NotFound("list_not_found".to_string()))?;
        list.title = untitled_or(&self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename list {}", self.list_id)
    }
}

/// Delete a list and the cards it owns.
pub struct DeleteList {
    pub board_id: Uuid,
    pub list_id: ListId,
}

impl Command for DeleteList {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let existed = context
            .lists
            .iter()
            .any(|l| l.board_id == self.board_id && l.id == self.list_id);
        if !existed {
            return Err(BoardError::NotFound("list_not_found".to_string()));
        }
        context
            .cards
            .retain(|c| !(c.board_id == self.board_id && c.list_id == self.list_id));
        context
            .lists
            .retain(|l| !(l.board_id == self.board_id && l.id == self.list_id));
        // Close the gap so the surviving lists stay at 0..n-1.
        let remaining = ordering::list_sequence(context.lists, self.board_id);
        ordering::resequence_lists(context.lists, &remaining);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }
}

/// Assign dense positions from the caller's full desired id sequence.
///
/// Ids that do not resolve within the board are dropped from the sequence
/// rather than rejected, so a reorder from a stale client still applies to
/// the ids it does know about and the surviving lists end up at 0..n-1.
pub struct ReorderLists {
    pub board_id: Uuid,
    pub order: Vec<ListId>,
}

impl Command for ReorderLists {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let in_board: Vec<ListId> = self
            .order
            .iter()
            .copied()
            .filter(|id| {
                context
                    .lists
                    .iter()
                    .any(|l| l.board_id == self.board_id && l.id == *id)
            })
            .collect();
        for (idx, list_id) in in_board.iter().enumerate() {
            if let Some(list) = context.lists.iter_mut().find(|l| l.id == *list_id) {
                list.position = idx as i32;
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Reorder {} lists", self.order.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Card;

    struct Data {
        boards: Vec<crate::Board>,
        members: Vec<crate::Member>,
        lists: Vec<List>,
        cards: Vec<Card>,
    }

    impl Data {
        fn new() -> Self {
            Self {
                boards: Vec::new(),
                members: Vec::new(),
                lists: Vec::new(),
                cards: Vec::new(),
            }
        }

        fn execute(&mut self, cmd: &dyn Command) -> BoardResult<()> {
            let mut ctx = CommandContext {
                boards: &mut self.boards,
                members: &mut self.members,
                lists: &mut self.lists,
                cards: &mut self.cards,
            };
            cmd.execute(&mut ctx)
        }
    }

    #[test]
    fn test_create_list_appends() {
        let mut data = Data::new();
        let board_id = Uuid::new_v4();

        data.execute(&CreateList { board_id, title: "First".into() }).unwrap();
        data.execute(&CreateList { board_id, title: "Second".into() }).unwrap();

        assert_eq!(data.lists[0].position, 0);
        assert_eq!(data.lists[1].position, 1);
    }

    #[test]
    fn test_create_list_blank_title_coerces() {
        let mut data = Data::new();
        data.execute(&CreateList { board_id: Uuid::new_v4(), title: "  ".into() }).unwrap();
        assert_eq!(data.lists[0].title, "Untitled");
    }

    #[test]
    fn test_rename_is_tenant_scoped() {
        let mut data = Data::new();
        let board_id = Uuid::new_v4();
        data.execute(&CreateList { board_id, title: "Mine".into() }).unwrap();
        let list_id = data.lists[0].id;

        // The right id from the wrong board must not resolve.
        let err = data
            .execute(&RenameList {
                board_id: Uuid::new_v4(),
                list_id,
                title: "Stolen".into(),
            })
            .unwrap_err();
        assert_eq!(err.reason(), "list_not_found");
        assert_eq!(data.lists[0].title, "Mine");
    }

    #[test]
    fn test_delete_list_cascades_to_cards() {
        let mut data = Data::new();
        let board_id = Uuid::new_v4();
        data.execute(&CreateList { board_id, title: "A".into() }).unwrap();
        let list_id = data.lists[0].id;
        data.cards.push(Card::new(board_id, list_id, "c".into(), 0));

        data.execute(&DeleteList { board_id, list_id }).unwrap();
        assert!(data.lists.is_empty());
        assert!(data.cards.is_empty());
    }

    #[test]
    fn test_delete_list_closes_position_gap() {
        let mut data = Data::new();
        let board_id = Uuid::new_v4();
        data.execute(&CreateList { board_id, title: "A".into() }).unwrap();
        data.execute(&CreateList { board_id, title: "B".into() }).unwrap();
        data.execute(&CreateList { board_id, title: "C".into() }).unwrap();
        let middle = data.lists[1].id;

        let other_board = Uuid::new_v4();
        data.execute(&CreateList { board_id: other_board, title: "X".into() }).unwrap();

        data.execute(&DeleteList { board_id, list_id: middle }).unwrap();

        let positions: Vec<(String, i32)> = ordering::list_sequence(&data.lists, board_id)
            .into_iter()
            .map(|id| {
                let list = data.lists.iter().find(|l| l.id == id).unwrap();
                (list.title.clone(), list.position)
            })
            .collect();
        assert_eq!(positions, vec![("A".to_string(), 0), ("C".to_string(), 1)]);
        // The other tenant's list keeps its own position.
        assert_eq!(data.lists.iter().find(|l| l.board_id == other_board).unwrap().position, 0);
    }

    #[test]
    fn test_reorder_ignores_foreign_ids() {
        let mut data = Data::new();
        let board_id = Uuid::new_v4();
        data.execute(&CreateList { board_id, title: "A".into() }).unwrap();
        data.execute(&CreateList { board_id, title: "B".into() }).unwrap();
        let a = data.lists[0].id;
        let b = data.lists[1].id;

        let other_board = Uuid::new_v4();
        data.execute(&CreateList { board_id: other_board, title: "X".into() }).unwrap();
        let foreign = data.lists[2].id;

        data.execute(&ReorderLists {
            board_id,
            order: vec![foreign, b, a],
        })
        .unwrap();

        // Foreign id dropped; the in-board lists get dense positions.
        assert_eq!(data.lists.iter().find(|l| l.id == b).unwrap().position, 0);
        assert_eq!(data.lists.iter().find(|l| l.id == a).unwrap().position, 1);
        assert_eq!(data.lists.iter().find(|l| l.id == foreign).unwrap().position, 0);

        let order = ordering::list_sequence(&data.lists, board_id);
        assert_eq!(order, vec![b, a]);
    }
}
