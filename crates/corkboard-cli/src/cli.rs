use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "A collaborative kanban board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board data file (or set CORKBOARD_FILE)
    #[arg(long, value_name = "FILE", env = "CORKBOARD_FILE", global = true)]
    pub file: Option<String>,

    /// Username to act as (or set CORKBOARD_USER)
    #[arg(long, value_name = "USER", env = "CORKBOARD_USER", global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Membership operations
    Member(MemberCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board with the default lists
    Create {
        #[arg(long)]
        name: Option<String>,
    },
    /// Join a board by its invitation code
    Join {
        #[arg(long)]
        code: String,
    },
    /// Show a board's lists and cards
    View {
        #[arg(long)]
        id: Uuid,
        /// Filter cards by a case-insensitive substring
        #[arg(long)]
        search: Option<String>,
    },
    /// Export a board as JSON
    Export {
        #[arg(long)]
        id: Uuid,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Wipe a board back to its three empty default lists
    Reset {
        #[arg(long)]
        id: Uuid,
    },
    /// Delete a board and everything it owns
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct MemberCommand {
    #[command(subcommand)]
    pub action: MemberAction,
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Change another member's role
    SetRole {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        username: String,
        /// One of: admin, mentor, student, spectator
        #[arg(long)]
        role: String,
    },
    /// List a board's members
    List {
        #[arg(long)]
        board_id: Uuid,
    },
}

#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Create a new list at the end of the board
    Create {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Rename {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a list and its cards
    Delete {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Reorder lists to match a comma-separated id sequence
    Reorder {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        order: String,
    },
}

#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a new card at the end of a list
    Create {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        list_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Replace a card's editable fields
    Update(CardUpdateArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Move a card to an index within a list
    Move {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        list_id: Uuid,
        #[arg(long)]
        index: i64,
    },
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub board_id: Uuid,
    #[arg(long)]
    pub id: Uuid,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub desc: String,
    /// One of: not_started, in_progress, finished
    #[arg(long, default_value = "")]
    pub tag: String,
}
