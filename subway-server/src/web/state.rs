//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::PathCache;
use crate::repository::MemoryRepository;
use crate::service::SubwayService;

/// The service type the server runs with.
pub type Subway = SubwayService<MemoryRepository>;

/// Shared application state.
///
/// Topology edits take the write lock, so edits are serialized while
/// path queries can run side by side.
#[derive(Clone)]
pub struct AppState {
    /// Stations, lines and their chains
    pub subway: Arc<RwLock<Subway>>,

    /// Path results keyed by topology version
    pub paths: PathCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(subway: Subway, paths: PathCache) -> Self {
        Self {
            subway: Arc::new(RwLock::new(subway)),
            paths,
        }
    }
}
