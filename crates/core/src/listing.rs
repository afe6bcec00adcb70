//! Pagination and sorting helpers shared by the list endpoints.
//!
//! Lives in `core` so the repositories and the HTTP layer agree on defaults,
//! clamping and sort-key semantics.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Upper bound on rows per page when no configuration overrides it.
pub const MAX_PAGE_LIMIT: i64 = 250;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max.max(1))
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Resolved `offset`/`limit` pair, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: Option<i64>, limit: Option<i64>, max_limit: i64) -> Self {
        Self {
            offset: clamp_offset(offset),
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT.min(max_limit), max_limit),
        }
    }

    /// Slice a fully sorted result set. A window past the end is empty.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

// ---------------------------------------------------------------------------
// Sort options
// ---------------------------------------------------------------------------

/// Sort order for the character listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSort {
    /// Character name, A to Z.
    #[default]
    Character,
    /// Movie title, A to Z.
    Movie,
    /// Total line count, highest first.
    NumberOfLines,
}

/// Sort order for the conversation listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationSort {
    /// Total line count, highest first.
    LineCount,
    /// Movie title, A to Z.
    Title,
    /// Conversation id, ascending.
    #[default]
    ConversationId,
}

/// Compare two optional sort keys in ascending order, absent keys last.
pub fn cmp_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
