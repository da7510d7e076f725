use std::sync::Arc;
use std::time::Instant;

use solver_core::agent::Agent;

use crate::config::ServerConfig;
use crate::engine::TaskDispatcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and never mutated afterwards; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the expected submission secret.
    pub config: Arc<ServerConfig>,
    /// Background dispatcher for agent runs.
    pub dispatcher: Arc<TaskDispatcher>,
    /// Monotonic instant the service started, for `/healthz` uptime.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, agent: Arc<dyn Agent>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(TaskDispatcher::new(agent)),
            started_at: Instant::now(),
        }
    }
}
