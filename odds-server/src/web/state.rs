//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{EngineConfig, RouteProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Source of the route graph
    pub routes: Arc<dyn RouteProvider>,

    /// Engine configuration from the mission file
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: impl RouteProvider + 'static, config: EngineConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            config: Arc::new(config),
        }
    }
}
