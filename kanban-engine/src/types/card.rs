//! Card type: a single work item

use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// A card on the kanban board.
///
/// Optional fields are truly optional: an absent description is `None`,
/// never an empty string. Text normalization happens at the boundary in
/// [`crate::normalize`] before a card is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Display-ordered tags; duplicates are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
}

impl Card {
    /// Create a card with only a title
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
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

    /// Set the responsibilities
    pub fn with_responsibilities(mut self, responsibilities: Vec<String>) -> Self {
        self.responsibilities = Some(responsibilities);
        self
    }
}
