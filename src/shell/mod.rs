//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute_interactive, execute_quiet, locate_tool, CommandOutcome};
