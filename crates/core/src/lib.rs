//! Domain types for the solver dispatch service.
//!
//! Holds everything that does not depend on HTTP: submission parsing and
//! validation, the request identifier, the agent abstraction, and the
//! domain error taxonomy.

pub mod agent;
pub mod error;
pub mod submission;
pub mod types;
