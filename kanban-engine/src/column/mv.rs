//! MoveColumn command

use crate::error::{BoardError, Result};
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::reorder::move_within;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Name of the board as a drop container
pub const BOARD_CONTAINER: &str = "board";

/// Move a column to a new position in the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveColumn {
    pub from_index: usize,
    pub to_index: usize,
}

operation!(
    MoveColumn,
    verb = "move",
    noun = "column",
    description = "Move a column to a different position on the board"
);

impl MoveColumn {
    /// Create a new MoveColumn command
    pub fn new(from_index: usize, to_index: usize) -> Self {
        Self {
            from_index,
            to_index,
        }
    }
}

impl Apply for MoveColumn {
    fn apply(&self, board: &Board, _ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        if self.from_index == self.to_index {
            return Ok(None);
        }

        let columns = move_within(&board.columns, self.from_index, self.to_index)
            .map_err(|e| e.within(BOARD_CONTAINER))?;
        let output = serde_json::json!({
            "id": &columns[self.to_index].id,
            "index": self.to_index,
        });
        Ok(Some(Applied::new(Board { columns }, output)))
    }

    fn violates_contract(&self, error: &BoardError) -> bool {
        error.is_contract_violation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, run};
    use std::sync::Arc;

    fn column_ids(board: &Board) -> Vec<&str> {
        board.columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_move_column() {
        let board = fixture();
        let applied = run(&MoveColumn::new(2, 0), &board).unwrap().unwrap();
        assert_eq!(column_ids(&applied.board), vec!["c3", "c1", "c2"]);
        // Columns are moved, not rebuilt
        assert!(Arc::ptr_eq(&board.columns[2], &applied.board.columns[0]));
        assert_eq!(column_ids(&board), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_move_column_same_index() {
        assert!(run(&MoveColumn::new(0, 0), &fixture()).unwrap().is_none());
        // Short-circuits before any bounds check, even on an empty board
        assert!(run(&MoveColumn::new(0, 0), &Board::default()).unwrap().is_none());
    }

    #[test]
    fn test_move_column_out_of_range() {
        let err = run(&MoveColumn::new(0, 3), &fixture()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, index: 3, len: 3 } if container == "board"
        ));
    }
}
