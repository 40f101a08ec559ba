use corkboard_core::BoardResult;

pub mod board_commands;
pub mod card_commands;
pub mod list_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use list_commands::*;

/// Trait for domain commands that mutate state.
///
/// A command is the unit of atomicity: the caller runs it while holding the
/// datastore exclusively, and a command either applies fully or returns an
/// error before touching anything.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state.
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()>;

    /// Human-readable description of what this command does.
    fn description(&self) -> String;
}

/// Context passed to commands for mutation.
pub struct CommandContext<'a> {
    pub boards: &'a mut Vec<crate::Board>,
    pub members: &'a mut Vec<crate::Member>,
    pub lists: &'a mut Vec<crate::List>,
    pub cards: &'a mut Vec<crate::Card>,
}
