//! Role → capability mapping.
//!
//! Pure functions over the finite role set; every board-scoped handler calls
//! [`require_member`] first and then the capability check for its action.

use corkboard_core::{BoardError, BoardResult, UserId};

use crate::{board::BoardId, member::Member, member::Role};

/// Resolve the role a user holds on a board, if any.
pub fn get_role(members: &[Member], board_id: BoardId, user_id: UserId) -> Option<Role> {
    members
        .iter()
        .find(|m| m.board_id == board_id && m.user_id == user_id)
        .map(|m| m.role)
}

/// The universal guard: membership or `Permission("not_member")`.
pub fn require_member(members: &[Member], board_id: BoardId, user_id: UserId) -> BoardResult<Role> {
    get_role(members, board_id, user_id).ok_or_else(BoardError::not_member)
}

/// Any assigned role may read the board; non-members may not.
pub fn can_read(role: Option<Role>) -> bool {
    role.is_some()
}

pub fn can_manage_roles(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

pub fn can_manage_lists(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin) | Some(Role::Mentor))
}

pub fn can_manage_cards(role: Option<Role>) -> bool {
    matches!(
        role,
        Some(Role::Admin) | Some(Role::Mentor) | Some(Role::Student)
    )
}
