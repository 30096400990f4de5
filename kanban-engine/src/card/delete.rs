//! DeleteCard command

use crate::error::Result;
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::types::{Board, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Remove a card from a column.
///
/// Deleting a card that is already gone, or from a column that no longer
/// exists, does nothing, so retried or reordered deletes are harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCard {
    /// The column holding the card
    pub column: ColumnId,
    /// The card to remove
    pub id: CardId,
}

operation!(
    DeleteCard,
    verb = "delete",
    noun = "card",
    description = "Remove a card from a column"
);

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(column: impl Into<ColumnId>, id: impl Into<CardId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

impl Apply for DeleteCard {
    fn apply(&self, board: &Board, _ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        let Some((index, position)) = board.card_position(&self.column, &self.id) else {
            tracing::debug!(column = %self.column, card = %self.id, "card already gone");
            return Ok(None);
        };
        let column = &board.columns[index];

        let mut cards = column.cards.clone();
        cards.remove(position);

        let next = board.replace_column(index, column.with_cards(cards));
        let output = serde_json::json!({ "id": &self.id, "column": &self.column });
        Ok(Some(Applied::new(next, output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card_ids, fixture, run};

    #[test]
    fn test_delete_card() {
        let board = fixture();
        let applied = run(&DeleteCard::new("c1", "b"), &board).unwrap().unwrap();
        assert_eq!(card_ids(&applied.board, 0), vec!["a", "c"]);
        assert_eq!(card_ids(&board, 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delete_twice_is_noop_second_time() {
        let board = fixture();
        let once = run(&DeleteCard::new("c1", "a"), &board).unwrap().unwrap().board;
        assert!(run(&DeleteCard::new("c1", "a"), &once).unwrap().is_none());
    }

    #[test]
    fn test_delete_from_wrong_column() {
        // Card d lives in c2, not c1
        assert!(run(&DeleteCard::new("c1", "d"), &fixture()).unwrap().is_none());
    }

    #[test]
    fn test_delete_from_missing_column() {
        assert!(run(&DeleteCard::new("gone", "a"), &fixture()).unwrap().is_none());
    }
}
