//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod dispatcher;
pub mod start;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use start::StartCommand;
