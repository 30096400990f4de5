//! Completed drag gestures as reported by the UI layer

use crate::card::MoveCard;
use crate::column::{MoveColumn, BOARD_CONTAINER};
use crate::intent::Intent;
use serde::{Deserialize, Serialize};

/// What was dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Column,
    Card,
}

/// A container plus a zero-based index within it.
///
/// The container is `"board"` for column drags and a column id for card
/// drags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub container: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }

    /// A position in the board's column list
    pub fn on_board(index: usize) -> Self {
        Self::new(BOARD_CONTAINER, index)
    }
}

/// A finished drag: where it started and where, if anywhere, it landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub kind: DragKind,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

impl DragResult {
    /// A column drag between two board positions
    pub fn column(from_index: usize, to_index: usize) -> Self {
        Self {
            kind: DragKind::Column,
            source: DropLocation::on_board(from_index),
            destination: Some(DropLocation::on_board(to_index)),
        }
    }

    /// A card drag between two column positions
    pub fn card(source: DropLocation, destination: DropLocation) -> Self {
        Self {
            kind: DragKind::Card,
            source,
            destination: Some(destination),
        }
    }

    /// A drag released outside any drop target
    pub fn cancelled(kind: DragKind, source: DropLocation) -> Self {
        Self {
            kind,
            source,
            destination: None,
        }
    }

    /// The move this drag asks for, or `None` when it was dropped outside
    /// any target or back onto its origin.
    pub fn to_intent(&self) -> Option<Intent> {
        let destination = self.destination.as_ref()?;
        if destination == &self.source {
            return None;
        }

        let intent: Intent = match self.kind {
            DragKind::Column => MoveColumn::new(self.source.index, destination.index).into(),
            DragKind::Card => MoveCard::new(
                self.source.container.as_str(),
                destination.container.as_str(),
                self.source.index,
                destination.index,
            )
            .into(),
        };
        Some(intent)
    }
}
