//! BoardEngine: holds the current board and applies intents to it

use crate::config::EngineConfig;
use crate::drag::DragResult;
use crate::error::Result;
use crate::id_generator::{IdGenerator, UlidGenerator};
use crate::intent::Intent;
use crate::notify::{Notifier, TracingNotifier};
use crate::operation::EngineContext;
use crate::processor::{reduce, Outcome};
use crate::types::Board;

/// Single-writer owner of "the current board".
///
/// Each call replaces the board with a new value; boards handed out
/// earlier stay valid and unchanged, so callers can diff old against new.
/// Calls must be serialized by the caller; there is no internal locking.
pub struct BoardEngine {
    board: Board,
    ids: Box<dyn IdGenerator>,
    notifier: Box<dyn Notifier>,
    config: EngineConfig,
}

impl BoardEngine {
    /// Start from `board` with ULID ids, tracing notifications and default
    /// configuration. Fails if the board has duplicate column or card ids.
    pub fn new(board: Board) -> Result<Self> {
        Self::with_config(board, EngineConfig::default())
    }

    /// Start from `board` with explicit configuration
    pub fn with_config(board: Board, config: EngineConfig) -> Result<Self> {
        board.validate()?;
        tracing::debug!(
            columns = board.columns.len(),
            cards = board.card_count(),
            "board engine created"
        );
        Ok(Self {
            board,
            ids: Box::new(UlidGenerator::new()),
            notifier: Box::new(TracingNotifier),
            config,
        })
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replace the notifier
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give up the engine, keeping the current board
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reduce `intent` against the current board and make the result
    /// current. Notifications go out after the board is replaced.
    pub fn process(&mut self, intent: impl Into<Intent>) -> Outcome {
        let intent = intent.into();
        let mut ctx = EngineContext::new(&mut *self.ids, &self.config);
        let outcome = reduce(&self.board, &intent, &mut ctx);

        if let Outcome::Applied {
            board,
            notification,
            ..
        } = &outcome
        {
            self.board = board.clone();
            if let Some(notification) = notification {
                self.notifier.notify(notification);
            }
        }
        outcome
    }

    /// Apply `intent`, ignoring why it might have been rejected
    pub fn apply(&mut self, intent: impl Into<Intent>) -> &Board {
        self.process(intent);
        &self.board
    }

    /// Apply `intent`, surfacing the rejection reason if there is one
    pub fn try_apply(&mut self, intent: impl Into<Intent>) -> Result<&Board> {
        self.process(intent).into_result()?;
        Ok(&self.board)
    }

    /// Apply a completed drag. Drops with no destination or onto their own
    /// origin leave the board untouched.
    pub fn apply_drag(&mut self, drag: &DragResult) -> &Board {
        match drag.to_intent() {
            Some(intent) => self.apply(intent),
            None => &self.board,
        }
    }
}
