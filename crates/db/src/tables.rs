//! Whole-table access to the backing store.
//!
//! The corpus reads every table once at startup and rewrites the
//! conversations and lines tables after each append. [`TableStore`] is the
//! seam for that: [`LocalDirStore`] keeps one CSV file per table in a
//! directory, [`MemoryTableStore`] keeps them in memory.

use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

/// The four backing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Movies,
    Characters,
    Conversations,
    Lines,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Movies => "movies",
            Table::Characters => "characters",
            Table::Conversations => "conversations",
            Table::Lines => "lines",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads and replaces complete tables.
///
/// Implementations are synchronous; callers on an async runtime run them on
/// a blocking thread.
pub trait TableStore: Send + Sync {
    /// Return the raw CSV bytes of `table`.
    fn read(&self, table: Table) -> Result<Vec<u8>, StoreError>;

    /// Replace `table` with `contents`. A failed write must leave the
    /// previous contents in place.
    fn write(&self, table: Table, contents: &[u8]) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Local directory
// ---------------------------------------------------------------------------

/// Tables stored as `<dir>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct LocalDirStore {
    root: PathBuf,
}

impl LocalDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, table: Table) -> PathBuf {
        self.root.join(table.file_name())
    }
}

impl TableStore for LocalDirStore {
    fn read(&self, table: Table) -> Result<Vec<u8>, StoreError> {
        let path = self.path_of(table);
        std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StoreError::MissingTable {
                table,
                location: path.display().to_string(),
            },
            _ => StoreError::Io { table, source },
        })
    }

    fn write(&self, table: Table, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.path_of(table);
        let staging = path.with_extension("csv.tmp");

        // Write beside the target, then swap it in with a rename.
        std::fs::write(&staging, contents)
            .and_then(|()| std::fs::rename(&staging, &path))
            .map_err(|source| {
                let _ = std::fs::remove_file(&staging);
                StoreError::Io { table, source }
            })?;

        tracing::debug!(table = %table, bytes = contents.len(), path = %path.display(), "Table written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In memory
// ---------------------------------------------------------------------------

/// Tables held in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    tables: Mutex<HashMap<Table, Vec<u8>>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed a table.
    pub fn with_table(self, table: Table, contents: impl Into<Vec<u8>>) -> Self {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(table, contents.into());
        self
    }

    /// Current contents of `table`, if it exists.
    pub fn contents(&self, table: Table) -> Option<Vec<u8>> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&table)
            .cloned()
    }
}

impl TableStore for MemoryTableStore {
    fn read(&self, table: Table) -> Result<Vec<u8>, StoreError> {
        self.contents(table).ok_or(StoreError::MissingTable {
            table,
            location: "memory".to_string(),
        })
    }

    fn write(&self, table: Table, contents: &[u8]) -> Result<(), StoreError> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(table, contents.to_vec());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
