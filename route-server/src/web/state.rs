//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTransportClient;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Generic over the transport data source so the same handlers serve
/// the mock network in development and instrumented sources in tests.
pub struct AppState<S> {
    /// Cached transport data client.
    pub client: Arc<CachedTransportClient<S>>,

    /// Planner configuration.
    pub config: Arc<SearchConfig>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(client: CachedTransportClient<S>, config: SearchConfig) -> Self {
        Self {
            client: Arc::new(client),
            config: Arc::new(config),
        }
    }
}

// Manual impl: `S` itself doesn't need to be `Clone` behind the `Arc`s.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: Arc::clone(&self.config),
        }
    }
}
