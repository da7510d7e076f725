use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use solver_agent::HttpAgent;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solver_api::config::ServerConfig;
use solver_api::router::build_app_router;
use solver_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solver_api=debug,solver_agent=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        email_configured = config.email.is_some(),
        cors_restricted = config.cors_origins.is_some(),
        "Loaded server configuration",
    );
    if config.cors_origins.is_none() {
        tracing::warn!("CORS_ORIGINS not set, accepting requests from any origin");
    }

    // --- Agent ---
    let agent_timeout = Duration::from_secs(config.agent_timeout_secs);
    let agent = HttpAgent::new(agent_timeout).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to initialise agent");
        std::process::exit(1);
    });

    let addr = SocketAddr::new(
        config.host.parse().unwrap_or_else(|_| {
            tracing::error!(host = %config.host, "HOST is not a valid IP address");
            std::process::exit(1);
        }),
        config.port,
    );
    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);

    // --- App state ---
    let state = AppState::new(config, Arc::new(agent));
    let dispatcher = Arc::clone(&state.dispatcher);

    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, draining background tasks");

    if dispatcher.shutdown(shutdown_timeout).await {
        tracing::info!("Graceful shutdown complete");
    } else {
        tracing::warn!(
            abandoned = dispatcher.in_flight(),
            "Shutdown timeout reached with background tasks still running",
        );
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
