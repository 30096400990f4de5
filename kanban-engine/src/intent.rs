//! Intents: the described user actions the engine accepts

use crate::card::{AddCard, DeleteCard, EditCard, MoveCard};
use crate::column::{AddColumn, MoveColumn};
use crate::error::Result;
use crate::operation::Apply;
use serde::{Deserialize, Serialize};

/// One user action against the board.
///
/// Serializes with an `op` tag carrying the canonical op string:
///
/// ```
/// use kanban_engine::Intent;
///
/// let intent =
///     Intent::from_json(r#"{"op": "add card", "column": "todo", "title": "Write docs"}"#)
///         .unwrap();
/// assert!(matches!(intent, Intent::AddCard(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum Intent {
    #[serde(rename = "move column")]
    MoveColumn(MoveColumn),
    #[serde(rename = "move card")]
    MoveCard(MoveCard),
    #[serde(rename = "add card")]
    AddCard(AddCard),
    #[serde(rename = "add column")]
    AddColumn(AddColumn),
    #[serde(rename = "delete card")]
    DeleteCard(DeleteCard),
    #[serde(rename = "edit card")]
    EditCard(EditCard),
}

impl Intent {
    /// Parse an intent from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The command carried by this intent
    pub fn command(&self) -> &dyn Apply {
        match self {
            Self::MoveColumn(cmd) => cmd,
            Self::MoveCard(cmd) => cmd,
            Self::AddCard(cmd) => cmd,
            Self::AddColumn(cmd) => cmd,
            Self::DeleteCard(cmd) => cmd,
            Self::EditCard(cmd) => cmd,
        }
    }
}

macro_rules! intent_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Intent {
                fn from(cmd: $variant) -> Self {
                    Self::$variant(cmd)
                }
            }
        )*
    };
}

intent_from!(MoveColumn, MoveCard, AddCard, AddColumn, DeleteCard, EditCard);
