//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkStore;
use crate::planner::PlannerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide network data
    pub network: NetworkStore,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkStore, config: PlannerConfig) -> Self {
        Self {
            network,
            config: Arc::new(config),
        }
    }
}
