use std::sync::Arc;

use dialogue_db::{CorpusStore, TableStore};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The loaded corpus. Queries take the read lock, appends the write lock.
    pub corpus: Arc<RwLock<CorpusStore>>,
    /// Backing tables appends are written through to.
    pub tables: Arc<dyn TableStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(corpus: CorpusStore, tables: Arc<dyn TableStore>, config: ServerConfig) -> Self {
        Self {
            corpus: Arc::new(RwLock::new(corpus)),
            tables,
            config: Arc::new(config),
        }
    }
}
