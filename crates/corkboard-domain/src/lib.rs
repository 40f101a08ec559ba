pub mod board;
pub mod card;
pub mod commands;
pub mod export;
pub mod list;
pub mod member;
pub mod operations;
pub mod ordering;
pub mod permissions;
pub mod user;
pub mod view;

pub use board::{Board, BoardId};
pub use card::{Card, CardId, CardTag};
pub use export::{BoardSnapshot, SnapshotBuilder};
pub use list::{List, ListId};
pub use member::{Member, Role};
pub use operations::{BoardOperations, CardFields};
pub use user::User;
pub use view::{BoardView, ListView};
