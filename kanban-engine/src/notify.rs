//! Fire-and-forget move notifications.
//!
//! A cross-column card move produces a [`MoveNotification`]. The engine
//! hands it to a [`Notifier`] after the new board is in place; whatever
//! the notifier does with it cannot affect the state transition.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// A card landed in a different column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveNotification {
    pub card_title: String,
    pub column_title: String,
}

impl MoveNotification {
    pub fn new(card_title: impl Into<String>, column_title: impl Into<String>) -> Self {
        Self {
            card_title: card_title.into(),
            column_title: column_title.into(),
        }
    }
}

impl fmt::Display for MoveNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved \"{}\" to {}", self.card_title, self.column_title)
    }
}

/// Receives move notifications. Implementations must not panic and must
/// not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &MoveNotification);
}

/// Logs notifications at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &MoveNotification) {
        tracing::info!(
            card = %notification.card_title,
            column = %notification.column_title,
            "{}",
            notification
        );
    }
}

/// Drops notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &MoveNotification) {}
}

/// Fans notifications out to any number of subscribers, e.g. a toast
/// layer. Sending with no subscribers is not an error.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<MoveNotification>,
}

impl BroadcastNotifier {
    /// Create a notifier buffering up to `capacity` undelivered messages
    /// per subscriber. Slow subscribers lose the oldest messages.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to future notifications
    pub fn subscribe(&self) -> broadcast::Receiver<MoveNotification> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: &MoveNotification) {
        if self.sender.send(notification.clone()).is_err() {
            tracing::trace!("no subscribers for move notification");
        }
    }
}
