//! Background task execution.
//!
//! Holds the dispatcher that turns an authorized submission into a detached
//! agent run.

pub mod dispatcher;

pub use dispatcher::{DispatchError, TaskDispatcher};
