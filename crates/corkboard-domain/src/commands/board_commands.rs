use super::{Command, CommandContext};
use crate::{Board, Card, List, Member, Role};
use corkboard_core::{BoardError, BoardResult, UserId};
use uuid::Uuid;

/// Titles of the lists every fresh or reset board starts with.
pub const DEFAULT_LIST_TITLES: [&str; 3] = ["To do", "Doing", "Done"];

/// (list index, title, description) of the cards seeded on board creation.
const DEFAULT_CARDS: [(usize, &str, &str); 4] = [
    (0, "Set up your board", "Create lists and add cards."),
    (0, "Drag cards", "Reorder within a list or move across lists."),
    (1, "Click a card to edit", "Edit title and description in a modal."),
    (2, "Persist to database", "Reload the page and your board stays."),
];

fn create_default_lists(context: &mut CommandContext, board_id: Uuid) -> Vec<Uuid> {
    DEFAULT_LIST_TITLES
        .iter()
        .enumerate()
        .map(|(position, title)| {
            let list = List::new(board_id, title.to_string(), position as i32);
            let id = list.id;
            context.lists.push(list);
            id
        })
        .collect()
}

/// Create a board with an admin membership for its owner, the three default
/// lists and the default starter cards.
pub struct CreateBoard {
    pub name: String,
    pub owner: UserId,
    /// Fallback when `name` is blank after trimming.
    pub default_name: String,
    pub join_code_len: usize,
}

impl Command for CreateBoard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let name = self.name.trim();
        let name = if name.is_empty() {
            self.default_name.clone()
        } else {
            name.to_string()
        };

        // Collision odds are astronomically low at 16 alphanumeric chars,
        // but the uniqueness invariant is still checked rather than assumed.
        let mut join_code = Board::generate_join_code(self.join_code_len);
        while context.boards.iter().any(|b| b.join_code == join_code) {
            join_code = Board::generate_join_code(self.join_code_len);
        }

        let board = Board::new(name, self.owner, join_code);
        let board_id = board.id;
        context.boards.push(board);
        context
            .members
            .push(Member::new(board_id, self.owner, Role::Admin));

        let list_ids = create_default_lists(context, board_id);
        let mut positions = std::collections::HashMap::new();
        for (list_index, title, desc) in DEFAULT_CARDS {
            let list_id = list_ids[list_index];
            let position = positions.entry(list_id).or_insert(0i32);
            context.cards.push(
                Card::new(board_id, list_id, title.to_string(), *position).with_desc(desc),
            );
            *position += 1;
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create board: '{}'", self.name)
    }
}

/// Add a spectator membership, keeping an existing one untouched.
pub struct JoinBoard {
    pub board_id: Uuid,
    pub user_id: UserId,
}

impl Command for JoinBoard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let already_member = context
            .members
            .iter()
            .any(|m| m.board_id == self.board_id && m.user_id == self.user_id);
        if !already_member {
            context
                .members
                .push(Member::new(self.board_id, self.user_id, Role::Spectator));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Join board {}", self.board_id)
    }
}

/// Change a member's role. The creator's admin role is immutable.
pub struct SetRole {
    pub board_id: Uuid,
    pub target_user: UserId,
    pub role: Role,
}

impl Command for SetRole {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let board = context
            .boards
            .iter()
            .find(|b| b.id == self.board_id)
            .ok_or_else(|| BoardError::NotFound("board_not_found".to_string()))?;
        if self.target_user == board.created_by {
            return Err(BoardError::Invariant(
                "cannot_change_creator_role".to_string(),
            ));
        }

        let member = context
            .members
            .iter_mut()
            .find(|m| m.board_id == self.board_id && m.user_id == self.target_user)
            .ok_or_else(|| BoardError::NotFound("member_not_found".to_string()))?;
        member.role = self.role;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set role of {} to {}", self.target_user, self.role.as_str())
    }
}

/// Delete every card and list of a board and recreate the default lists.
/// No starter cards after a reset.
pub struct ResetBoard {
    pub board_id: Uuid,
}

impl Command for ResetBoard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.cards.retain(|c| c.board_id != self.board_id);
        context.lists.retain(|l| l.board_id != self.board_id);
        create_default_lists(context, self.board_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Reset board {}", self.board_id)
    }
}

/// Delete a board and everything it owns: members, lists, cards.
pub struct DeleteBoard {
    pub board_id: Uuid,
}

impl Command for DeleteBoard {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        let existed = context.boards.iter().any(|b| b.id == self.board_id);
        if !existed {
            return Err(BoardError::NotFound("board_not_found".to_string()));
        }
        context.cards.retain(|c| c.board_id != self.board_id);
        context.lists.retain(|l| l.board_id != self.board_id);
        context.members.retain(|m| m.board_id != self.board_id);
        context.boards.retain(|b| b.id != self.board_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}
