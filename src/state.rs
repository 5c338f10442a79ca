//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RepositoryService;
use crate::infrastructure::memory::InMemoryRepositoryStore;

/// Handle to the process-wide services.
///
/// Cloning is cheap; every clone shares the same store.
#[derive(Clone)]
pub struct AppState {
    pub repository_service: Arc<RepositoryService<InMemoryRepositoryStore>>,
}

impl AppState {
    pub fn new(repository_service: Arc<RepositoryService<InMemoryRepositoryStore>>) -> Self {
        Self { repository_service }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryRepositoryStore::new());
        Self::new(Arc::new(RepositoryService::new(store)))
    }
}
