//! Board-level types: Board, Column

use super::card::Card;
use super::ids::{CardId, ColumnId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// The kanban board: an ordered sequence of columns.
///
/// Columns and cards sit behind `Arc` so a board produced by an intent can
/// share every untouched column and card with the board it came from.
/// Nothing is ever mutated through those pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Arc<Column>>,
}

impl Board {
    /// Create a board from owned columns
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    /// Append a column (builder style, for fixtures and seed data)
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(Arc::new(column));
        self
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Position of a column in display order
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Find which column holds a card, returning (column index, card index)
    pub fn locate_card(&self, id: &CardId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, col)| col.card_index(id).map(|i| (ci, i)))
    }

    /// Where a card sits inside a named column, as (column index, card index)
    pub fn card_position(&self, column: &ColumnId, id: &CardId) -> Option<(usize, usize)> {
        let index = self.column_index(column)?;
        let position = self.columns[index].card_index(id)?;
        Some((index, position))
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Check that column ids are pairwise distinct and that card ids are
    /// pairwise distinct across the whole board.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
            for card in &column.cards {
                if !card_ids.insert(&card.id) {
                    return Err(BoardError::duplicate_id("card", card.id.as_str()));
                }
            }
        }
        Ok(())
    }

    /// Copy of this board with the column at `index` swapped for `column`.
    /// Every other column is shared with `self`.
    pub(crate) fn replace_column(&self, index: usize, column: Column) -> Self {
        let mut columns = self.columns.clone();
        columns[index] = Arc::new(column);
        Self { columns }
    }
}

/// A column is one workflow stage holding an ordered list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Arc<Card>>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Append a card (builder style, for fixtures and seed data)
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(Arc::new(card));
        self
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Position of a card within this column
    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }

    /// Same column with a different card list
    pub(crate) fn with_cards(&self, cards: Vec<Arc<Card>>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::default()
            .with_column(
                Column::new("todo", "To Do")
                    .with_card(Card::new("a", "A"))
                    .with_card(Card::new("b", "B")),
            )
            .with_column(Column::new("done", "Done").with_card(Card::new("c", "C")))
    }

    #[test]
    fn test_lookups() {
        let board = sample();
        assert_eq!(board.column_index(&"done".into()), Some(1));
        assert!(board.find_column(&"nope".into()).is_none());
        assert_eq!(board.locate_card(&"b".into()), Some((0, 1)));
        assert_eq!(board.locate_card(&"c".into()), Some((1, 0)));
        assert_eq!(board.locate_card(&"z".into()), None);
        assert_eq!(board.card_count(), 3);

        assert_eq!(board.card_position(&"done".into(), &"c".into()), Some((1, 0)));
        assert_eq!(board.card_position(&"todo".into(), &"c".into()), None);
        assert_eq!(board.card_position(&"gone".into(), &"a".into()), None);

        let todo = &board.columns[0];
        assert_eq!(todo.find_card(&"b".into()).map(|c| c.title.as_str()), Some("B"));
        assert!(todo.find_card(&"c".into()).is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
        assert!(Board::default().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_column() {
        let board = sample().with_column(Column::new("todo", "Again"));
        let err = board.validate().unwrap_err();
        assert!(matches!(err, BoardError::DuplicateId { kind: "column", .. }));
    }

    #[test]
    fn test_validate_duplicate_card_across_columns() {
        let board = sample()
            .with_column(Column::new("later", "Later").with_card(Card::new("a", "A2")));
        let err = board.validate().unwrap_err();
        assert!(matches!(
            err,
            BoardError::DuplicateId { kind: "card", ref id } if id == "a"
        ));
    }

    #[test]
    fn test_replace_column_shares_untouched() {
        let board = sample();
        let next = board.replace_column(0, Column::new("todo", "Renamed"));
        assert_eq!(next.columns[0].title, "Renamed");
        assert!(Arc::ptr_eq(&board.columns[1], &next.columns[1]));
        assert_eq!(board.columns[0].title, "To Do");
    }

    #[test]
    fn test_board_serialization() {
        let board = sample();
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
