//! Log entry types for applied intents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record of one applied intent.
///
/// Returned to the caller with every successful transition. The engine does
/// not keep these; storing them is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the intent was applied
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add card", "move column")
    pub op: String,

    /// The intent as submitted
    pub input: Value,

    /// What changed (ids and positions)
    pub output: Value,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(op: impl Into<String>, input: Value, output: Value) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
        }
    }
}
