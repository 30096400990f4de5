//! AddCard command

use crate::error::{BoardError, Result};
use crate::normalize::trimmed;
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::types::{Board, Card, ColumnId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Append a new card to a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCard {
    /// The column receiving the card
    pub column: ColumnId,
    /// Raw title text; trimmed before use
    pub title: String,
}

operation!(
    AddCard,
    verb = "add",
    noun = "card",
    description = "Create a card at the end of a column"
);

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
        }
    }
}

impl Apply for AddCard {
    fn apply(&self, board: &Board, ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        let title = trimmed(&self.title).ok_or(BoardError::EmptyTitle { what: "card" })?;
        let index = board
            .column_index(&self.column)
            .ok_or_else(|| BoardError::column_not_found(self.column.as_str()))?;

        let card = Card::new(ctx.next_card_id(board)?, title);
        let output = serde_json::json!({ "id": &card.id, "column": &self.column });

        let column = &board.columns[index];
        let mut cards = column.cards.clone();
        cards.push(Arc::new(card));

        let next = board.replace_column(index, column.with_cards(cards));
        Ok(Some(Applied::new(next, output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card_ids, fixture, run};

    #[test]
    fn test_add_card_trims_and_appends() {
        let board = fixture();
        let applied = run(&AddCard::new("c1", "  New Task  "), &board)
            .unwrap()
            .unwrap();

        let column = &applied.board.columns[0];
        assert_eq!(column.cards.len(), 4);
        let card = &column.cards[3];
        assert_eq!(card.title, "New Task");
        assert_eq!(card.id.as_str(), "card-1");
        assert!(card.description.is_none());
        assert!(card.assignee.is_none());
        assert!(card.responsibilities.is_none());
        assert_eq!(applied.output["id"], "card-1");
    }

    #[test]
    fn test_add_card_leaves_other_columns_shared() {
        let board = fixture();
        let applied = run(&AddCard::new("c3", "Ship"), &board).unwrap().unwrap();

        assert!(Arc::ptr_eq(&board.columns[0], &applied.board.columns[0]));
        assert!(Arc::ptr_eq(&board.columns[1], &applied.board.columns[1]));
        assert_eq!(card_ids(&applied.board, 2), vec!["card-1"]);
        // Input untouched
        assert!(board.columns[2].cards.is_empty());
    }

    #[test]
    fn test_add_card_whitespace_title_rejected() {
        let board = fixture();
        let err = run(&AddCard::new("c1", "   "), &board).unwrap_err();
        assert!(matches!(err, BoardError::EmptyTitle { what: "card" }));
    }

    #[test]
    fn test_add_card_unknown_column() {
        let board = fixture();
        let err = run(&AddCard::new("nope", "Task"), &board).unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound { .. }));
    }
}
