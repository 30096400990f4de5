//! Session-unique identifier generation

use crate::error::{BoardError, Result};

/// Produces identifier tokens that never repeat within a process.
///
/// Generators know nothing about ids already present in a board; the
/// engine checks for collisions with seed data separately.
pub trait IdGenerator: Send {
    /// Return a token distinct from every token previously returned
    fn next_id(&mut self) -> Result<String>;
}

/// ULID-based generator.
///
/// Backed by a monotonic `ulid::Generator`, so ids minted within the same
/// millisecond still differ and still sort in creation order.
pub struct UlidGenerator {
    inner: ulid::Generator,
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self {
            inner: ulid::Generator::new(),
        }
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UlidGenerator {
    fn next_id(&mut self) -> Result<String> {
        self.inner
            .generate()
            .map(|ulid| ulid.to_string())
            .map_err(|_| BoardError::IdExhausted)
    }
}

/// Counter-based generator yielding `1`, `2`, `3`, ...
///
/// Deterministic, which makes it the generator of choice for fixtures.
#[derive(Debug, Default, Clone)]
pub struct SequentialGenerator {
    next: u64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last`
    pub fn starting_after(last: u64) -> Self {
        Self { next: last }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> Result<String> {
        self.next = self.next.checked_add(1).ok_or(BoardError::IdExhausted)?;
        Ok(self.next.to_string())
    }
}
