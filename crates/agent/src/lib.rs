//! `solver-agent` -- default agent implementation.
//!
//! [`HttpAgent`] fetches the submitted URL and logs what came back. It is
//! the agent wired into the API server unless a different [`Agent`] is
//! supplied.
//!
//! [`Agent`]: solver_core::agent::Agent

pub mod http;

pub use http::{AgentBuildError, HttpAgent};
