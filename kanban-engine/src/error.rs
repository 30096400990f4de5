//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons an intent can leave the board unchanged, plus setup failures.
///
/// An intent that fails never produces a partially updated board: the
/// caller always gets back the input unchanged together with one of these.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Index outside the bounds of a container
    #[error("index {index} out of range for {container} (len {len})")]
    IndexOutOfRange {
        container: String,
        index: usize,
        len: usize,
    },

    /// Title was empty after trimming
    #[error("{what} title must not be empty")]
    EmptyTitle { what: &'static str },

    /// Duplicate ID
    #[error("duplicate {kind} ID: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The id generator could not produce a fresh value
    #[error("id generator exhausted")]
    IdExhausted,

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a column-not-found error
    pub fn column_not_found(id: impl Into<String>) -> Self {
        Self::ColumnNotFound { id: id.into() }
    }

    /// Create an out-of-range error
    pub fn index_out_of_range(container: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            container: container.into(),
            index,
            len,
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Attach a container name to an out-of-range error raised by the
    /// container-agnostic reorder functions.
    pub fn within(self, container: impl Into<String>) -> Self {
        match self {
            Self::IndexOutOfRange { index, len, .. } => Self::IndexOutOfRange {
                container: container.into(),
                index,
                len,
            },
            other => other,
        }
    }

    /// True for errors that, raised by a move, mean the caller handed the
    /// engine a stale or impossible request (bad index, unknown column).
    ///
    /// The same `ColumnNotFound` from an add is an ordinary rejection, so
    /// callers go through [`Apply::violates_contract`](crate::Apply::violates_contract)
    /// rather than asking the error alone.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::ColumnNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::column_not_found("column-9");
        assert_eq!(err.to_string(), "column not found: column-9");

        let err = BoardError::index_out_of_range("board", 4, 3);
        assert_eq!(err.to_string(), "index 4 out of range for board (len 3)");

        let err = BoardError::EmptyTitle { what: "card" };
        assert_eq!(err.to_string(), "card title must not be empty");
    }

    #[test]
    fn test_within_relabels_only_range_errors() {
        let err = BoardError::index_out_of_range("sequence", 5, 2).within("todo");
        assert_eq!(err.to_string(), "index 5 out of range for todo (len 2)");

        let err = BoardError::column_not_found("x").within("todo");
        assert!(matches!(err, BoardError::ColumnNotFound { ref id } if id == "x"));
    }

    #[test]
    fn test_contract_violation() {
        assert!(BoardError::index_out_of_range("board", 1, 0).is_contract_violation());
        assert!(BoardError::column_not_found("x").is_contract_violation());
        assert!(!BoardError::duplicate_id("card", "x").is_contract_violation());
        assert!(!BoardError::EmptyTitle { what: "column" }.is_contract_violation());
    }
}
