//! Demo seed board.
//!
//! Seed data is a presentation concern; the engine accepts any well-formed
//! board. This is the board a fresh UI shows before the user has one.

use crate::types::{Board, Card, Column};

/// Three stages with a handful of starter cards
pub fn demo_board() -> Board {
    Board::default()
        .with_column(
            Column::new("column-1", "To Do")
                .with_card(
                    Card::new("card-1", "Create design system")
                        .with_description("Define colors, typography and components"),
                )
                .with_card(
                    Card::new("card-2", "Implement drag and drop")
                        .with_description("Wire gestures to board moves"),
                ),
        )
        .with_column(
            Column::new("column-2", "In Progress").with_card(
                Card::new("card-3", "Build UI components")
                    .with_description("Create the visual elements of the application"),
            ),
        )
        .with_column(
            Column::new("column-3", "Done").with_card(
                Card::new("card-4", "Project setup")
                    .with_description("Initialize the project and install dependencies"),
            ),
        )
}
