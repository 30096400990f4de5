//! Splice-based reordering of ordered sequences.
//!
//! Both functions are container-agnostic: they work on any slice of cheaply
//! clonable elements (the board passes `Arc<Column>` and `Arc<Card>`) and
//! never touch their inputs. Range errors name a generic container; callers
//! relabel them with [`BoardError::within`].

use crate::error::{BoardError, Result};

/// Remove the element at `from` and reinsert it at `to`.
///
/// `to` indexes the sequence *after* the removal, so moving the first of
/// three elements to index 2 puts it last. Requires `from < len` and
/// `to < len`.
///
/// ```
/// use kanban_engine::reorder::move_within;
///
/// let moved = move_within(&["a", "b", "c"], 0, 2).unwrap();
/// assert_eq!(moved, vec!["b", "c", "a"]);
/// ```
pub fn move_within<T: Clone>(sequence: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = sequence.len();
    if from >= len {
        return Err(BoardError::index_out_of_range("sequence", from, len));
    }
    if to >= len {
        return Err(BoardError::index_out_of_range("sequence", to, len));
    }

    let mut result = sequence.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Ok(result)
}

/// Both halves of a cross-container move, produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossMove<T> {
    /// Source sequence with the element removed
    pub source: Vec<T>,
    /// Destination sequence with the element inserted
    pub destination: Vec<T>,
}

/// Remove the element at `from` in `source` and insert it at `to` in
/// `destination`.
///
/// Requires `from < source.len()` and `to <= destination.len()`; `to ==
/// destination.len()` appends.
pub fn move_across<T: Clone>(
    source: &[T],
    destination: &[T],
    from: usize,
    to: usize,
) -> Result<CrossMove<T>> {
    if from >= source.len() {
        return Err(BoardError::index_out_of_range("source", from, source.len()));
    }
    if to > destination.len() {
        return Err(BoardError::index_out_of_range(
            "destination",
            to,
            destination.len(),
        ));
    }

    let mut source = source.to_vec();
    let mut destination = destination.to_vec();
    let moved = source.remove(from);
    destination.insert(to, moved);
    Ok(CrossMove {
        source,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        assert_eq!(move_within(&[1, 2, 3, 4], 0, 2).unwrap(), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_move_backward() {
        assert_eq!(move_within(&[1, 2, 3, 4], 3, 1).unwrap(), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_move_same_index_is_identity() {
        assert_eq!(move_within(&[1, 2, 3], 1, 1).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_within_out_of_range() {
        let err = move_within(&[1, 2], 2, 0).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 2, len: 2, .. }));

        // `to` is bounded by len - 1, not len
        let err = move_within(&[1, 2], 0, 2).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 2, len: 2, .. }));

        assert!(move_within::<i32>(&[], 0, 0).is_err());
    }

    #[test]
    fn test_move_across_into_empty() {
        let moved = move_across(&["a"], &[], 0, 0).unwrap();
        assert!(moved.source.is_empty());
        assert_eq!(moved.destination, vec!["a"]);
    }

    #[test]
    fn test_move_across_append_and_middle() {
        let moved = move_across(&["a", "b"], &["x", "y"], 1, 2).unwrap();
        assert_eq!(moved.source, vec!["a"]);
        assert_eq!(moved.destination, vec!["x", "y", "b"]);

        let moved = move_across(&["a", "b"], &["x", "y"], 0, 1).unwrap();
        assert_eq!(moved.source, vec!["b"]);
        assert_eq!(moved.destination, vec!["x", "a", "y"]);
    }

    #[test]
    fn test_move_across_out_of_range() {
        let err = move_across(&["a"], &["x"], 1, 0).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, .. } if container == "source"
        ));

        let err = move_across(&["a"], &["x"], 0, 2).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IndexOutOfRange { ref container, .. } if container == "destination"
        ));
    }

    #[test]
    fn test_inputs_untouched() {
        let source = vec![1, 2];
        let destination = vec![3];
        let _ = move_across(&source, &destination, 0, 0).unwrap();
        assert_eq!(source, vec![1, 2]);
        assert_eq!(destination, vec![3]);
    }
}
