use crate::config::ServiceConfig;
use crate::store::memory::MemoryStore;
use crate::store::AnalysisStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,

    /// Storage backend (shared across requests)
    pub store: Arc<dyn AnalysisStore>,
}

impl AppState {
    /// Create application state around an arbitrary storage backend.
    pub fn new(config: ServiceConfig, store: Arc<dyn AnalysisStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// State backed by the in-memory store. Used by the binary and by tests.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}
