#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use solver_api::config::ServerConfig;
use solver_api::router::build_app_router;
use solver_api::state::AppState;
use solver_core::agent::{Agent, AgentResult};
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Secret configured for every test app.
pub const TEST_SECRET: &str = "abc123";

/// Agent that reports every URL it is run with.
pub struct RecordingAgent {
    seen: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl Agent for RecordingAgent {
    async fn run(&self, url: &str) -> AgentResult {
        let _ = self.seen.send(url.to_string());
        Ok(())
    }
}

/// A router wired to a [`RecordingAgent`], plus handles to inspect what it did.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub seen: mpsc::UnboundedReceiver<String>,
}

impl TestApp {
    /// Drain the dispatcher and return every URL the agent was run with.
    pub async fn dispatched_urls(&mut self) -> Vec<String> {
        assert!(
            self.state.dispatcher.shutdown(Duration::from_secs(5)).await,
            "background tasks did not finish"
        );
        let mut urls = Vec::new();
        while let Ok(url) = self.seen.try_recv() {
            urls.push(url);
        }
        urls
    }
}

/// Build a test `ServerConfig` with safe defaults and [`TEST_SECRET`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: None,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        agent_timeout_secs: 5,
        secret: TEST_SECRET.to_string(),
        email: None,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = AppState::new(config, Arc::new(RecordingAgent { seen: tx }));
    TestApp {
        router: build_app_router(state.clone()),
        state,
        seen: rx,
    }
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a raw body and a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
