//! In-memory movie-dialogue corpus backed by flat CSV tables.
//!
//! [`CorpusStore`] owns the loaded entities, their derived line counts and
//! the id sequences. The repositories under [`repositories`] answer the
//! read-only queries; [`CorpusStore::append_conversation`] is the single
//! write path.

pub mod codec;
pub mod error;
pub mod models;
pub mod repositories;
pub mod sequence;
pub mod store;
pub mod tables;

pub use error::StoreError;
pub use store::{CorpusStats, CorpusStore};
pub use tables::{LocalDirStore, MemoryTableStore, Table, TableStore};
