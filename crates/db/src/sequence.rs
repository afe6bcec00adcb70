//! Monotonic id allocation, one sequence per entity type.

use std::ops::Range;

use dialogue_core::types::DbId;

/// Hands out ids strictly greater than anything seen before.
///
/// Reservation and commit are separate so a write that fails after ids were
/// picked does not burn them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: DbId,
}

impl IdSequence {
    /// A sequence whose first id is `last + 1`.
    pub fn starting_after(last: DbId) -> Self {
        Self { last: last.max(0) }
    }

    /// Seed from the largest existing id, or start at 1 for an empty table.
    pub fn seeded_from<I: IntoIterator<Item = DbId>>(ids: I) -> Self {
        Self::starting_after(ids.into_iter().max().unwrap_or(0))
    }

    /// Highest id committed so far.
    pub fn last(&self) -> DbId {
        self.last
    }

    /// The next id, without consuming it.
    pub fn peek(&self) -> DbId {
        self.last + 1
    }

    /// The next `count` ids, without consuming them.
    pub fn reserve(&self, count: usize) -> Range<DbId> {
        self.peek()..self.peek() + count as DbId
    }

    /// Mark every id up to and including `id` as used.
    pub fn commit_through(&mut self, id: DbId) {
        self.last = self.last.max(id);
    }
}
