//! Integration tests for [`HttpAgent`] against a throwaway local server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use solver_agent::HttpAgent;
use solver_core::agent::Agent;

/// Serve a tiny router on an ephemeral port and return its address.
async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/page", get(|| async { "<html>quiz</html>" }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn agent(timeout: Duration) -> HttpAgent {
    HttpAgent::new(timeout).unwrap()
}

#[tokio::test]
async fn succeeds_on_2xx() {
    let addr = spawn_server().await;
    let result = agent(Duration::from_secs(5))
        .run(&format!("http://{addr}/page"))
        .await;
    assert!(result.is_ok(), "unexpected error: {result:?}");
}

#[tokio::test]
async fn fails_on_error_status() {
    let addr = spawn_server().await;
    let result = agent(Duration::from_secs(5))
        .run(&format!("http://{addr}/missing"))
        .await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("404"), "got: {err}");
}

#[tokio::test]
async fn fails_on_timeout() {
    let addr = spawn_server().await;
    let result = agent(Duration::from_millis(200))
        .run(&format!("http://{addr}/slow"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn fails_on_unparseable_url() {
    let result = agent(Duration::from_secs(1)).run("not a url").await;
    assert!(result.is_err());
}
