//! The agent abstraction invoked for every accepted submission.

use async_trait::async_trait;

/// Result type returned by an agent run. The error is boxed because the
/// dispatcher only ever logs it.
pub type AgentResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A unit of work triggered with the submitted URL.
///
/// Implementations run detached from the request that scheduled them; the
/// caller never sees the outcome.
#[async_trait]
pub trait Agent: Send + Sync + 'static {
    async fn run(&self, url: &str) -> AgentResult;
}
