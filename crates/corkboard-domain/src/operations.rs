use corkboard_core::{BoardResult, UserId};

use crate::{
    board::{Board, BoardId},
    card::{Card, CardId, CardTag},
    export::{BoardSnapshot, MemberExport},
    list::{List, ListId},
    member::Role,
    view::BoardView,
};

/// Update payload for a card; the whole set of editable fields is always
/// supplied, with blank/unknown values coerced rather than rejected.
#[derive(Debug, Clone)]
pub struct CardFields {
    pub title: String,
    pub desc: String,
    pub tag: CardTag,
}

/// The full action surface, role-gated per operation.
///
/// Every method takes the acting user and resolves their membership before
/// touching board data. Having one trait keeps every consumer of the core
/// (service, CLI, a future HTTP adapter) compiling against the same surface.
pub trait BoardOperations {
    // Board lifecycle and membership
    fn create_board(&mut self, actor: UserId, name: &str) -> BoardResult<Board>;
    fn join_board(&mut self, actor: UserId, code: &str) -> BoardResult<Board>;
    fn set_member_role(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        target_user: UserId,
        role: Role,
    ) -> BoardResult<()>;
    fn list_members(&self, actor: UserId, board_id: BoardId) -> BoardResult<Vec<MemberExport>>;
    fn reset_board(&mut self, actor: UserId, board_id: BoardId) -> BoardResult<()>;
    fn delete_board(&mut self, actor: UserId, board_id: BoardId) -> BoardResult<()>;

    // Read side
    fn board_view(
        &self,
        actor: UserId,
        board_id: BoardId,
        search: Option<&str>,
    ) -> BoardResult<BoardView>;
    fn export_board(&self, actor: UserId, board_id: BoardId) -> BoardResult<BoardSnapshot>;

    // Lists
    fn create_list(&mut self, actor: UserId, board_id: BoardId, title: &str) -> BoardResult<List>;
    fn rename_list(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        list_id: ListId,
        title: &str,
    ) -> BoardResult<()>;
    fn delete_list(&mut self, actor: UserId, board_id: BoardId, list_id: ListId)
        -> BoardResult<()>;
    fn reorder_lists(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        order: &[ListId],
    ) -> BoardResult<()>;

    // Cards
    fn create_card(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        list_id: ListId,
        title: &str,
    ) -> BoardResult<Card>;
    fn update_card(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        card_id: CardId,
        fields: CardFields,
    ) -> BoardResult<Card>;
    fn delete_card(&mut self, actor: UserId, board_id: BoardId, card_id: CardId)
        -> BoardResult<()>;
    fn move_card(
        &mut self,
        actor: UserId,
        board_id: BoardId,
        card_id: CardId,
        to_list_id: ListId,
        to_index: i64,
    ) -> BoardResult<()>;
}
