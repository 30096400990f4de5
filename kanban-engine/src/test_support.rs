//! Fixtures shared by the command tests

use crate::config::EngineConfig;
use crate::error::Result;
use crate::id_generator::SequentialGenerator;
use crate::operation::{Applied, Apply, EngineContext};
use crate::types::{Board, Card, Column};

/// `c1 = [a, b, c]`, `c2 = [d]`, `c3 = []`
pub fn fixture() -> Board {
    Board::default()
        .with_column(
            Column::new("c1", "To Do")
                .with_card(Card::new("a", "Card A"))
                .with_card(Card::new("b", "Card B"))
                .with_card(Card::new("c", "Card C")),
        )
        .with_column(Column::new("c2", "In Progress").with_card(Card::new("d", "Card D")))
        .with_column(Column::new("c3", "Done"))
}

/// Apply a command with a fresh sequential generator and default config
pub fn run(command: &impl Apply, board: &Board) -> Result<Option<Applied>> {
    let mut ids = SequentialGenerator::new();
    let config = EngineConfig::default();
    let mut ctx = EngineContext::new(&mut ids, &config);
    command.apply(board, &mut ctx)
}

/// Card ids of a column, in order
pub fn card_ids(board: &Board, column: usize) -> Vec<&str> {
    board.columns[column]
        .cards
        .iter()
        .map(|c| c.id.as_str())
        .collect()
}
