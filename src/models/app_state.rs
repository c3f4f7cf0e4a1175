use std::sync::Arc;

use crate::services::record_store::InstanceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InstanceStore>,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(store: InstanceStore) -> Self {
        Self {
            store: Arc::new(store),
            cors_origins: Vec::new(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}
