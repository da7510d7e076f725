use std::time::Duration;

use async_trait::async_trait;
use solver_core::agent::{Agent, AgentResult};

/// Default per-request timeout for agent fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const USER_AGENT: &str = concat!("solver-agent/", env!("CARGO_PKG_VERSION"));

/// Failure to construct the underlying HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct AgentBuildError(#[from] reqwest::Error);

/// Agent that performs a single `GET` against the submitted URL.
///
/// A non-2xx status is treated as a failure. The response body is read to
/// completion so connection errors mid-body are reported too.
#[derive(Debug, Clone)]
pub struct HttpAgent {
    client: reqwest::Client,
}

impl HttpAgent {
    pub fn new(timeout: Duration) -> Result<Self, AgentBuildError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Agent for HttpAgent {
    async fn run(&self, url: &str) -> AgentResult {
        tracing::debug!(url, "Fetching submitted URL");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::info!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            "Agent fetch complete",
        );
        Ok(())
    }
}
