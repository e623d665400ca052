use std::sync::Arc;

use stockroom_store::{PhotoStore, RecordStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the stores hold only paths, the config is behind `Arc`.
/// No collection data is cached here between requests -- every handler reads
/// the persisted state fresh.
#[derive(Clone)]
pub struct AppState {
    /// Store owning the authoritative record collection file.
    pub records: RecordStore,
    /// Store owning the uploaded photo files.
    pub photos: PhotoStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
