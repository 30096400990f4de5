//! AddColumn command

use crate::error::{BoardError, Result};
use crate::normalize::trimmed;
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::types::{Board, Column};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Append a new, empty column to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddColumn {
    /// Raw title text; trimmed before use
    pub title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the end of the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Apply for AddColumn {
    fn apply(&self, board: &Board, ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        let title = trimmed(&self.title).ok_or(BoardError::EmptyTitle { what: "column" })?;
        let column = Column::new(ctx.next_column_id(board)?, title);
        let output = serde_json::json!({ "id": &column.id, "title": &column.title });

        let mut columns = board.columns.clone();
        columns.push(Arc::new(column));
        Ok(Some(Applied::new(Board { columns }, output)))
    }
}
