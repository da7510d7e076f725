pub mod health;
pub mod solve;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree.
///
/// ```text
/// GET  /healthz    liveness probe
/// POST /solve      authenticated task submission
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(solve::router())
}
