//! EditCard command

use crate::error::{BoardError, Result};
use crate::normalize::{clean_list, optional_text, split_delimited, trimmed};
use crate::operation::{operation, Applied, Apply, EngineContext};
use crate::types::{Board, Card, CardId, ColumnId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Responsibilities as they arrive from a form: one delimited string or a
/// ready-made list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsibilitiesInput {
    Text(String),
    List(Vec<String>),
}

impl ResponsibilitiesInput {
    /// Trimmed, non-empty tags in display order, or `None` if there are none
    pub fn normalize(&self, delimiter: char) -> Option<Vec<String>> {
        match self {
            Self::Text(text) => split_delimited(text, delimiter),
            Self::List(items) => clean_list(items),
        }
    }
}

impl From<&str> for ResponsibilitiesInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ResponsibilitiesInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for ResponsibilitiesInput {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Replace a card's editable fields wholesale.
///
/// Every optional field that is not supplied, or is blank after trimming,
/// becomes absent on the card. The id and the card's position never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCard {
    /// The column holding the card
    pub column: ColumnId,
    /// The card to edit
    pub id: CardId,
    /// New title; must not be blank
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<ResponsibilitiesInput>,
}

operation!(
    EditCard,
    verb = "edit",
    noun = "card",
    description = "Replace a card's title, description, assignee and responsibilities"
);

impl EditCard {
    /// Create a new EditCard command setting only the title
    pub fn new(
        column: impl Into<ColumnId>,
        id: impl Into<CardId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            title: title.into(),
            description: None,
            assignee: None,
            responsibilities: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the responsibilities, as delimited text or a list
    pub fn with_responsibilities(
        mut self,
        responsibilities: impl Into<ResponsibilitiesInput>,
    ) -> Self {
        self.responsibilities = Some(responsibilities.into());
        self
    }
}

impl Apply for EditCard {
    fn apply(&self, board: &Board, ctx: &mut EngineContext<'_>) -> Result<Option<Applied>> {
        let title = trimmed(&self.title).ok_or(BoardError::EmptyTitle { what: "card" })?;

        let Some((index, position)) = board.card_position(&self.column, &self.id) else {
            tracing::debug!(column = %self.column, card = %self.id, "card already gone");
            return Ok(None);
        };
        let column = &board.columns[index];

        let delimiter = ctx.config().responsibility_delimiter;
        let card = Card {
            id: self.id.clone(),
            title,
            description: optional_text(self.description.as_deref()),
            assignee: optional_text(self.assignee.as_deref()),
            responsibilities: self
                .responsibilities
                .as_ref()
                .and_then(|r| r.normalize(delimiter)),
        };
        let output = serde_json::to_value(&card)?;

        let mut cards = column.cards.clone();
        cards[position] = Arc::new(card);

        let next = board.replace_column(index, column.with_cards(cards));
        Ok(Some(Applied::new(next, output)))
    }
}
