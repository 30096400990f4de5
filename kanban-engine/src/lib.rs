//! Immutable kanban board state engine
//!
//! A board is an ordered list of columns, each an ordered list of cards.
//! Every user action arrives as an [`Intent`]; applying it produces a new
//! [`Board`] and leaves the old one untouched, so a UI can keep the
//! previous snapshot around and diff against it.
//!
//! ## Overview
//!
//! - **Pure transitions** - [`reduce`] maps `(board, intent)` to an [`Outcome`]
//! - **Structural sharing** - untouched columns and cards are shared by `Arc`
//! - **No partial updates** - a rejected intent returns the input board
//! - **Drag aware** - [`DragResult`] turns a finished gesture into a move
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_engine::{card::{AddCard, MoveCard}, defaults::demo_board, BoardEngine};
//!
//! # fn example() -> kanban_engine::Result<()> {
//! let mut engine = BoardEngine::new(demo_board())?;
//!
//! // Add a card to "To Do"
//! engine.apply(AddCard::new("column-1", "  Write docs  "));
//!
//! // Drag the first card into "Done"
//! let board = engine.apply(MoveCard::new("column-1", "column-3", 0, 0));
//! assert_eq!(board.columns[2].cards[0].title, "Create design system");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Failure policy
//!
//! Out-of-range indices and unknown columns on moves are caller-contract
//! violations: they are logged at warn level and leave the board
//! unchanged. Other rejections (blank titles, adding to a missing column)
//! also leave the board unchanged, and [`BoardEngine::try_apply`] surfaces
//! the reason for both. Deleting or editing a card that is already gone is
//! not a rejection: nothing happens and `try_apply` succeeds.

mod config;
pub mod defaults;
pub mod drag;
mod engine;
mod error;
pub mod id_generator;
mod intent;
pub mod normalize;
pub mod notify;
mod operation;
mod processor;
pub mod reorder;
pub mod types;

// Command modules
pub mod card;
pub mod column;

#[cfg(test)]
mod test_support;

pub use config::{EngineConfig, ENV_PREFIX};
pub use drag::{DragKind, DragResult, DropLocation};
pub use engine::BoardEngine;
pub use error::{BoardError, Result};
pub use id_generator::{IdGenerator, SequentialGenerator, UlidGenerator};
pub use intent::Intent;
pub use notify::{BroadcastNotifier, MoveNotification, Notifier, NullNotifier, TracingNotifier};
pub use operation::{Applied, Apply, EngineContext, Operation};
pub use processor::{reduce, Outcome};

// Re-export commonly used types
pub use types::{Board, Card, CardId, Column, ColumnId, LogEntry};
