//! MoveCard command

use crate::error::{BoardError, Result};
use crate::notify::MoveNotification;
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::reorder::{move_across, move_within};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a card within a column or into another column.
///
/// Indices are those observed at drop time: `from_index` in the source
/// column, `to_index` in the destination column as it will look once the
/// card is in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCard {
    /// Column the card is dragged out of
    pub source: ColumnId,
    /// Column the card is dropped into
    pub destination: ColumnId,
    pub from_index: usize,
    pub to_index: usize,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to a different position or column"
);

impl MoveCard {
    /// Create a new MoveCard command
    pub fn new(
        source: impl Into<ColumnId>,
        destination: impl Into<ColumnId>,
        from_index: usize,
        to_index: usize,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            from_index,
            to_index,
        }
    }

    /// Reorder inside a single column
    pub fn within(column: impl Into<ColumnId>, from_index: usize, to_index: usize) -> Self {
        let column = column.into();
        Self::new(column.clone(), column, from_index, to_index)
    }

    /// True when the card would land exactly where it started
    pub fn is_noop(&self) -> bool {
        self.source == self.destination && self.from_index == self.to_index
    }
}

impl Apply for MoveCard {
    fn apply(&self, board: &Board, _ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        if self.is_noop() {
            return Ok(None);
        }

        let source_index = board
            .column_index(&self.source)
            .ok_or_else(|| BoardError::column_not_found(self.source.as_str()))?;
        let destination_index = board
            .column_index(&self.destination)
            .ok_or_else(|| BoardError::column_not_found(self.destination.as_str()))?;
        let source = &board.columns[source_index];

        if source_index == destination_index {
            let cards = move_within(&source.cards, self.from_index, self.to_index)
                .map_err(|e| e.within(source.id.as_str()))?;
            let moved = &cards[self.to_index];
            let output = serde_json::json!({
                "id": &moved.id,
                "column": &source.id,
                "index": self.to_index,
            });
            let next = board.replace_column(source_index, source.with_cards(cards));
            return Ok(Some(Applied::new(next, output)));
        }

        let destination = &board.columns[destination_index];
        let moved = move_across(
            &source.cards,
            &destination.cards,
            self.from_index,
            self.to_index,
        )
        .map_err(|e| {
            let in_source = matches!(
                &e,
                BoardError::IndexOutOfRange { container, .. } if container == "source"
            );
            let column = if in_source { source } else { destination };
            e.within(column.id.as_str())
        })?;

        let card = &moved.destination[self.to_index];
        let notification = MoveNotification::new(card.title.clone(), destination.title.clone());
        let output = serde_json::json!({
            "id": &card.id,
            "from": &source.id,
            "column": &destination.id,
            "index": self.to_index,
        });

        let mut columns = board.columns.clone();
        columns[source_index] = source.with_cards(moved.source).into();
        columns[destination_index] = destination.with_cards(moved.destination).into();

        Ok(Some(
            Applied::new(Board { columns }, output).with_notification(notification),
        ))
    }

    fn violates_contract(&self, error: &BoardError) -> bool {
        error.is_contract_violation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card_ids, fixture, run};
    use std::sync::Arc;

    #[test]
    fn test_reorder_within_column() {
        let board = fixture();
        let applied = run(&MoveCard::within("c1", 0, 2), &board).unwrap().unwrap();
        assert_eq!(card_ids(&applied.board, 0), vec!["b", "c", "a"]);
        assert!(applied.notification.is_none());
        assert!(Arc::ptr_eq(&board.columns[1], &applied.board.columns[1]));
        assert!(Arc::ptr_eq(&board.columns[2], &applied.board.columns[2]));
    }

    #[test]
    fn test_move_across_columns_notifies() {
        let board = fixture();
        let applied = run(&MoveCard::new("c1", "c3", 1, 0), &board).unwrap().unwrap();
        assert_eq!(card_ids(&applied.board, 0), vec!["a", "c"]);
        assert_eq!(card_ids(&applied.board, 2), vec!["b"]);
        assert_eq!(
            applied.notification,
            Some(MoveNotification::new("Card B", "Done"))
        );
        // The moved card is the same allocation, only its container changed
        assert!(Arc::ptr_eq(
            &board.columns[0].cards[1],
            &applied.board.columns[2].cards[0]
        ));
        assert!(Arc::ptr_eq(&board.columns[1], &applied.board.columns[1]));
    }

    #[test]
    fn test_move_across_append_at_end() {
        let board = fixture();
        let applied = run(&MoveCard::new("c1", "c2", 0, 1), &board).unwrap().unwrap();
        assert_eq!(card_ids(&applied.board, 1), vec!["d", "a"]);
    }

    #[test]
    fn test_same_position_short_circuits() {
        assert!(run(&MoveCard::within("c1", 1, 1), &fixture()).unwrap().is_none());
        // Even for a column that does not exist: nothing is looked up
        assert!(run(&MoveCard::within("ghost", 0, 0), &fixture()).unwrap().is_none());
    }

    #[test]
    fn test_unknown_column() {
        let err = run(&MoveCard::new("c1", "ghost", 0, 0), &fixture()).unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound { ref id } if id == "ghost"));
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_out_of_range_names_the_column() {
        let err = run(&MoveCard::within("c1", 0, 3), &fixture()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, .. } if container == "c1"
        ));

        let err = run(&MoveCard::new("c1", "c3", 5, 0), &fixture()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, .. } if container == "c1"
        ));

        let err = run(&MoveCard::new("c1", "c3", 0, 1), &fixture()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, .. } if container == "c3"
        ));
    }
}
