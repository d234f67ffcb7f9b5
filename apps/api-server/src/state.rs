//! Application state - shared across all handlers.

use std::sync::Arc;

use keel_core::ports::SampleRepository;
use keel_infra::InMemorySampleStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub samples: Arc<dyn SampleRepository>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            samples: Arc::new(InMemorySampleStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
