use dialogue_core::error::CoreError;

use crate::tables::Table;

/// Errors raised while loading, validating or persisting the corpus.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing table does not exist.
    #[error("Table {table} not found at {location}")]
    MissingTable { table: Table, location: String },

    /// Reading or writing a backing table failed.
    #[error("I/O error on table {table}: {source}")]
    Io {
        table: Table,
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid CSV, lacks a column, or has an unparsable key.
    #[error("Malformed {table} table: {source}")]
    Csv {
        table: Table,
        #[source]
        source: csv::Error,
    },

    /// A write was refused by a domain rule before anything changed.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}
