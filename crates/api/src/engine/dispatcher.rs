//! Fire-and-forget dispatcher for agent runs.
//!
//! Each accepted submission becomes one task spawned on the tokio runtime.
//! The request path never awaits it. Tasks are registered with a
//! [`TaskTracker`] only so shutdown can wait for in-flight work to drain.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use solver_core::agent::Agent;
use solver_core::types::RequestId;
use tokio_util::task::TaskTracker;
use tracing::Instrument;

/// Errors returned when scheduling a background task.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The dispatcher was closed by [`TaskDispatcher::shutdown`].
    #[error("Service is shutting down")]
    Closed,
}

pub struct TaskDispatcher {
    agent: Arc<dyn Agent>,
    tracker: TaskTracker,
}

impl TaskDispatcher {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            tracker: TaskTracker::new(),
        }
    }

    /// Schedule one agent run for `url` and return immediately.
    ///
    /// The outcome is only logged. Duplicate URLs are not coalesced.
    pub fn dispatch(&self, request_id: RequestId, url: String) -> Result<(), DispatchError> {
        if self.tracker.is_closed() {
            return Err(DispatchError::Closed);
        }

        let agent = Arc::clone(&self.agent);
        let span = tracing::info_span!("background_task", %request_id);

        self.tracker.spawn(
            async move {
                let outcome = AssertUnwindSafe(agent.run(&url)).catch_unwind().await;
                match outcome {
                    Ok(Ok(())) => tracing::info!(url = %url, "Background task finished"),
                    Ok(Err(e)) => {
                        tracing::warn!(url = %url, error = %e, "Background task failed")
                    }
                    Err(_) => tracing::error!(url = %url, "Background task panicked"),
                }
            }
            .instrument(span),
        );

        Ok(())
    }

    /// Number of background tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Stop accepting new work and wait up to `timeout` for in-flight tasks.
    ///
    /// Returns `true` if every task finished within the window. Tasks still
    /// running afterwards are abandoned with the runtime.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            tracing::info!(pending, "Waiting for background tasks to finish");
        }
        tokio::time::timeout(timeout, self.tracker.wait())
            .await
            .is_ok()
    }
}
