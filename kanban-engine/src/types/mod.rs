//! Core types for the board engine

mod board;
mod card;
mod ids;
mod log;

// Re-export all types
pub use board::{Board, Column};
pub use card::Card;
pub use ids::{CardId, ColumnId};
pub use log::LogEntry;
