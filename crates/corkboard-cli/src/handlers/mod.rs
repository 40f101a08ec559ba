pub mod board;
pub mod card;
pub mod list;
pub mod member;
