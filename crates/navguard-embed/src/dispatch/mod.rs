//! Dispatcher module exports.
//!
//! Re-exports the command model and the dispatcher so downstream consumers can
//! depend on this module directly.

pub mod command;
pub mod dispatcher;

pub use command::{Command, Reply};
pub use dispatcher::Dispatcher;
