//! Operation and Apply traits shared by every command.
//!
//! Commands are plain structs whose fields are the parameters. Each one
//! names itself through [`Operation`] and transforms a board through
//! [`Apply`].

use crate::config::EngineConfig;
use crate::error::{BoardError, Result};
use crate::id_generator::IdGenerator;
use crate::notify::MoveNotification;
use crate::types::{Board, CardId, ColumnId};
use serde_json::Value;

/// Self-description of a command
pub trait Operation {
    /// The action, e.g. "move"
    fn verb(&self) -> &'static str;

    /// The thing acted on, e.g. "card"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. "move card"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Implements [`Operation`] for a command struct.
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}
pub(crate) use operation;

/// What a command needs besides the board: fresh ids and configuration.
pub struct EngineContext<'a> {
    ids: &'a mut dyn IdGenerator,
    config: &'a EngineConfig,
}

impl<'a> EngineContext<'a> {
    pub fn new(ids: &'a mut dyn IdGenerator, config: &'a EngineConfig) -> Self {
        Self { ids, config }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    /// Mint a card id that is not already on `board`
    pub fn next_card_id(&mut self, board: &Board) -> Result<CardId> {
        let id = CardId::from(self.config.card_id(&self.ids.next_id()?));
        if board.locate_card(&id).is_some() {
            return Err(BoardError::duplicate_id("card", id.as_str()));
        }
        Ok(id)
    }

    /// Mint a column id that is not already on `board`
    pub fn next_column_id(&mut self, board: &Board) -> Result<ColumnId> {
        let id = ColumnId::from(self.config.column_id(&self.ids.next_id()?));
        if board.find_column(&id).is_some() {
            return Err(BoardError::duplicate_id("column", id.as_str()));
        }
        Ok(id)
    }
}

/// A successful state transition
#[derive(Debug, Clone)]
pub struct Applied {
    /// The next board
    pub board: Board,
    /// Summary of what changed, recorded in the log entry
    pub output: Value,
    /// Set only for cross-column card moves
    pub notification: Option<MoveNotification>,
}

impl Applied {
    pub fn new(board: Board, output: Value) -> Self {
        Self {
            board,
            output,
            notification: None,
        }
    }

    pub fn with_notification(mut self, notification: MoveNotification) -> Self {
        self.notification = Some(notification);
        self
    }
}

/// Transform a board.
///
/// `Ok(Some(_))` is a new board, `Ok(None)` means there is nothing to do
/// (a drop back onto the origin, or a delete/edit of a card that is already
/// gone), `Err(_)` means the intent was rejected.
/// Either way the input board is never modified.
pub trait Apply: Operation {
    fn apply(&self, board: &Board, ctx: &mut EngineContext<'_>) -> Result<Option<Applied>>;

    /// Whether `error` from [`Apply::apply`] means the caller broke this
    /// command's contract. Only moves have one; everything else is an
    /// ordinary rejection.
    fn violates_contract(&self, _error: &BoardError) -> bool {
        false
    }
}
