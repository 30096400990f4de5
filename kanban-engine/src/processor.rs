//! Pure intent dispatch: `(board, intent) -> outcome`

use crate::error::{BoardError, Result};
use crate::intent::Intent;
use crate::notify::MoveNotification;
use crate::operation::EngineContext;
use crate::types::{Board, LogEntry};

/// Result of reducing one intent against a board
#[derive(Debug)]
pub enum Outcome {
    /// The intent produced a new board
    Applied {
        board: Board,
        log_entry: LogEntry,
        notification: Option<MoveNotification>,
    },
    /// The board is unchanged. `reason` is `None` when there was nothing to
    /// do (a drop back onto the origin, a card already gone) and names the
    /// rejection otherwise.
    Unchanged {
        board: Board,
        reason: Option<BoardError>,
    },
}

impl Outcome {
    /// The board after the intent
    pub fn board(&self) -> &Board {
        match self {
            Self::Applied { board, .. } | Self::Unchanged { board, .. } => board,
        }
    }

    /// Take the board after the intent
    pub fn into_board(self) -> Board {
        match self {
            Self::Applied { board, .. } | Self::Unchanged { board, .. } => board,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// The board, or the reason the intent was rejected
    pub fn into_result(self) -> Result<Board> {
        match self {
            Self::Applied { board, .. } | Self::Unchanged { board, reason: None } => Ok(board),
            Self::Unchanged {
                reason: Some(error),
                ..
            } => Err(error),
        }
    }
}

/// Apply `intent` to `board`.
///
/// Never fails and never touches `board`: a rejected intent yields
/// [`Outcome::Unchanged`] holding a copy of the input that shares all of its
/// columns.
pub fn reduce(board: &Board, intent: &Intent, ctx: &mut EngineContext<'_>) -> Outcome {
    let command = intent.command();
    let op = command.op_string();

    match command.apply(board, ctx) {
        Ok(Some(applied)) => {
            tracing::debug!(op = %op, output = %applied.output, "intent applied");
            // Intents hold only strings, integers and string lists, which
            // always serialize.
            let input = serde_json::to_value(intent).unwrap_or_default();
            Outcome::Applied {
                board: applied.board,
                log_entry: LogEntry::new(op, input, applied.output),
                notification: applied.notification,
            }
        }
        Ok(None) => {
            tracing::trace!(op = %op, "nothing to do");
            Outcome::Unchanged {
                board: board.clone(),
                reason: None,
            }
        }
        Err(error) => {
            if command.violates_contract(&error) {
                tracing::warn!(op = %op, %error, "ignoring invalid intent");
                debug_assert!(
                    !ctx.config().strict,
                    "caller contract violated by {op}: {error}"
                );
            } else {
                tracing::debug!(op = %op, %error, "intent rejected");
            }
            Outcome::Unchanged {
                board: board.clone(),
                reason: Some(error),
            }
        }
    }
}
