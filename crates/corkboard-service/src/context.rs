use corkboard_core::{AppConfig, AuthProvider, BoardError, BoardResult, UserId};
use corkboard_domain::commands::{
    Command, CommandContext, CreateBoard, CreateCard, CreateList, DeleteBoard, DeleteCard,
    DeleteList, JoinBoard, MoveCard, RenameList, ReorderLists, ResetBoard, SetRole, UpdateCard,
};
use corkboard_domain::export::MemberExport;
use corkboard_domain::{
    permissions, Board, BoardOperations, BoardSnapshot, BoardView, Card, CardFields, List, Member,
    Role, SnapshotBuilder, User,
};
use corkboard_persistence::{JsonFileStore, PersistenceMetadata, PersistenceStore, StoreSnapshot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized shape of the whole working set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// The working set plus its store: every operation of the action surface is
/// implemented here, each one resolving the actor's membership before it
/// touches board data.
pub struct ServiceContext {
    pub users: Vec<User>,
    pub boards: Vec<Board>,
    pub members: Vec<Member>,
    pub lists: Vec<List>,
    pub cards: Vec<Card>,
    config: AppConfig,
    store: Option<JsonFileStore>,
}

impl ServiceContext {
    /// Load the working set from a store file, starting empty if the file
    /// does not exist yet.
    pub async fn load(file_path: &str) -> BoardResult<Self> {
        let store = JsonFileStore::new(file_path);

        if !store.exists().await {
            return Ok(Self::from_data(DataSet::default(), Some(store)));
        }

        let (snapshot, _metadata) = store.load().await?;
        let data: DataSet = serde_json::from_slice(&snapshot.data)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;

        Ok(Self::from_data(data, Some(store)))
    }

    /// A context with no backing store; state lives only in memory.
    pub fn in_memory() -> Self {
        Self::from_data(DataSet::default(), None)
    }

    fn from_data(data: DataSet, store: Option<JsonFileStore>) -> Self {
        Self {
            users: data.users,
            boards: data.boards,
            members: data.members,
            lists: data.lists,
            cards: data.cards,
            config: AppConfig::load(),
            store,
        }
    }

    /// Map the auth collaborator's principal onto the identity mirror,
    /// rejecting unauthenticated requests before any board data is touched.
    pub fn authenticate(&mut self, provider: &dyn AuthProvider) -> BoardResult<User> {
        let current = provider
            .current_user()
            .ok_or_else(|| BoardError::Permission("not_authenticated".to_string()))?;
        self.login(&current.username)
    }

    /// Resolve a username to its identity mirror, creating the record on
    /// first sight. Stand-in for the external auth provider's registration.
    pub fn login(&mut self, username: &str) -> BoardResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(BoardError::Validation("missing_fields".to_string()));
        }
        if let Some(user) = self.users.iter().find(|u| u.username == username) {
            return Ok(user.clone());
        }
        let user = User::new(username.to_string());
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn execute(&mut self, command: &dyn Command) -> BoardResult<()> {
        tracing::debug!("Executing: {}", command.description());
        let mut ctx = CommandContext {
            boards: &mut self.boards,
            members: &mut self.members,
            lists: &mut self.lists,
            cards: &mut self.cards,
        };
        command.execute(&mut ctx)
    }

    /// Persist the current working set as one snapshot. A no-op without a
    /// backing store.
    pub async fn save(&self) -> BoardResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };

        let data = DataSet {
            users: self.users.clone(),
            boards: self.boards.clone(),
            members: self.members.clone(),
            lists: self.lists.clone(),
            cards: self.cards.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&data)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;

        store
            .save(StoreSnapshot {
                data: bytes,
                metadata: PersistenceMetadata::new(store.instance_id()),
            })
            .await?;
        Ok(())
    }

    fn board(&self, board_id: Uuid) -> BoardResult<&Board> {
        self.boards
            .iter()
            .find(|b| b.id == board_id)
            .ok_or_else(|| BoardError::NotFound("board_not_found".to_string()))
    }

    /// Membership-then-capability gate shared by all list mutations.
    fn require_list_manager(&self, actor: UserId, board_id: Uuid) -> BoardResult<Role> {
        self.board(board_id)?;
        let role = permissions::require_member(&self.members, board_id, actor)?;
        if !permissions::can_manage_lists(Some(role)) {
            return Err(BoardError::Permission("no_list_permission".to_string()));
        }
        Ok(role)
    }

    /// Membership-then-capability gate shared by all card mutations.
    fn require_card_manager(&self, actor: UserId, board_id: Uuid) -> BoardResult<Role> {
        self.board(board_id)?;
        let role = permissions::require_member(&self.members, board_id, actor)?;
        if !permissions::can_manage_cards(Some(role)) {
            return Err(BoardError::Permission("no_card_permission".to_string()));
        }
        Ok(role)
    }
}

impl BoardOperations for ServiceContext {
    fn create_board(&mut self, actor: UserId, name: &str) -> BoardResult<Board> {
        self.execute(&CreateBoard {
            name: name.to_string(),
            owner: actor,
            default_name: self.config.default_board_name.clone(),
            join_code_len: self.config.join_code_len,
        })?;
        self.boards.last().cloned().ok_or_else(|| {
            BoardError::Internal("Board creation succeeded but board not found".into())
        })
    }

    fn join_board(&mut self, actor: UserId, code: &str) -> BoardResult<Board> {
        let code = code.trim();
        let board = self
            .boards
            .iter()
            .find(|b| b.join_code == code)
            .cloned()
            .ok_or_else(|| BoardError::NotFound("invalid_code".to_string()))?;
        self.execute(&JoinBoard {
            board_id: board.id,
            user_id: actor,
        })?;
        Ok(board)
    }

    fn set_member_role(
        &mut self,
        actor: UserId,
        board_id: Uuid,
        target_user: UserId,
        role: Role,
    ) -> BoardResult<()> {
        self.board(board_id)?;
        let actor_role = permissions::require_member(&self.members, board_id, actor)?;
        if !permissions::can_manage_roles(Some(actor_role)) {
            return Err(BoardError::Permission("not_admin".to_string()));
        }
        self.execute(&SetRole {
            board_id,
            target_user,
            role,
        })
    }

    fn list_members(&self, actor: UserId, board_id: Uuid) -> BoardResult<Vec<MemberExport>> {
        let board = self.board(board_id)?;
        permissions::require_member(&self.members, board_id, actor)?;
        let snapshot =
            SnapshotBuilder::build(board, &self.members, &self.users, &self.lists, &self.cards);
        Ok(snapshot.members)
    }

    fn reset_board(&mut self, actor: UserId, board_id: Uuid) -> BoardResult<()> {
        self.board(board_id)?;
        let role = permissions::require_member(&self.members, board_id, actor)?;
        if role != Role::Admin {
            return Err(BoardError::Permission("not_admin".to_string()));
        }
        self.execute(&ResetBoard { board_id })
    }

    fn delete_board(&mut self, actor: UserId, board_id: Uuid) -> BoardResult<()> {
        self.board(board_id)?;
        let role = permissions::require_member(&self.members, board_id, actor)?;
        if role != Role::Admin {
            return Err(BoardError::Permission("not_admin".to_string()));
        }
        self.execute(&DeleteBoard { board_id })
    }

    fn board_view(
        &self,
        actor: UserId,
        board_id: Uuid,
        search: Option<&str>,
    ) -> BoardResult<BoardView> {
        let board = self.board(board_id)?;
        let role = permissions::require_member(&self.members, board_id, actor)?;
        Ok(BoardView::build(board, role, &self.lists, &self.cards, search))
    }

    fn export_board(&self, actor: UserId, board_id: Uuid) -> BoardResult<BoardSnapshot> {
        let board = self.board(board_id)?;
        permissions::require_member(&self.members, board_id, actor)?;
        Ok(SnapshotBuilder::build(
            board,
            &self.members,
            &self.users,
            &self.lists,
            &self.cards,
        ))
    }

    fn create_list(&mut self, actor: UserId, board_id: Uuid, title: &str) -> BoardResult<List> {
        self.require_list_manager(actor, board_id)?;
        self.execute(&CreateList {
            board_id,
            title: title.to_string(),
        })?;
        self.lists.last().cloned().ok_or_else(|| {
            BoardError::Internal("List creation succeeded but list not found".into())
        })
    }

    fn rename_list(
        &mut self,
        actor: UserId,
        board_id: Uuid,
        list_id: Uuid,
        title: &str,
    ) -> BoardResult<()> {
        self.require_list_manager(actor, board_id)?;
        self.execute(&RenameList {
            board_id,
            list_id,
            title: title.to_string(),
        })
    }

    fn delete_list(&mut self, actor: UserId, board_id: Uuid, list_id: Uuid) -> BoardResult<()> {
        self.require_list_manager(actor, board_id)?;
        self.execute(&DeleteList { board_id, list_id })
    }

    fn reorder_lists(&mut self, actor: UserId, board_id: Uuid, order: &[Uuid]) -> BoardResult<()> {
        self.require_list_manager(actor, board_id)?;
        self.execute(&ReorderLists {
            board_id,
            order: order.to_vec(),
        })
    }

    fn create_card(
        &mut self,
        actor: UserId,
        board_id: Uuid,
        list_id: Uuid,
        title: &str,
    ) -> BoardResult<Card> {
        self.require_card_manager(actor, board_id)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::Validation("missing_fields".to_string()));
        }
        self.execute(&CreateCard {
            board_id,
            list_id,
            title: title.to_string(),
        })?;
        self.cards.last().cloned().ok_or_else(|| {
            BoardError::Internal("Card creation succeeded but card not found".into())
        })
    }

    fn update_card(
        &mut self,
        actor: UserId,
        board_id: Uuid,
        card_id: Uuid,
        fields: CardFields,
    ) -> BoardResult<Card> {
        self.require_card_manager(actor, board_id)?;
        self.execute(&UpdateCard {
            board_id,
            card_id,
            title: fields.title,
            desc: fields.desc,
            tag: fields.tag,
        })?;
        self.cards
            .iter()
            .find(|c| c.id == card_id)
            .cloned()
            .ok_or_else(|| BoardError::NotFound("card_not_found".to_string()))
    }

    fn delete_card(&mut self, actor: UserId, board_id: Uuid, card_id: Uuid) -> BoardResult<()> {
        self.require_card_manager(actor, board_id)?;
        self.execute(&DeleteCard { board_id, card_id })
    }

    fn move_card(
        &mut self,
        actor: UserId,
        board_id: Uuid,
        card_id: Uuid,
        to_list_id: Uuid,
        to_index: i64,
    ) -> BoardResult<()> {
        self.require_card_manager(actor, board_id)?;
        self.execute(&MoveCard {
            board_id,
            card_id,
            to_list_id,
            to_index,
        })
    }
}
