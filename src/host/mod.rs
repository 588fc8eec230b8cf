//! The machine a run inspects and acts on.
//!
//! Checks never touch the filesystem, the process environment or external
//! processes directly. They go through [`Host`], which lets tests script
//! probe results and record actions with [`MockHost`].
//!
//! # Example
//!
//! ```
//! use devkick::host::{Host, MockHost};
//! use devkick::shell::CommandOutcome;
//!
//! let mut host = MockHost::new();
//! host.add_file("package.json");
//! host.add_tool("node");
//! host.set_probe("git rev-parse --is-inside-work-tree", CommandOutcome::failed());
//!
//! assert!(host.file_exists("package.json"));
//! assert!(host.has_tool("node"));
//! assert!(!host.probe("git rev-parse --is-inside-work-tree").ok);
//! ```

pub mod mock;
pub mod system;

pub use mock::MockHost;
pub use system::SystemHost;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::CommandOutcome;

/// Access to the project directory, installed tools and external processes.
pub trait Host {
    /// The project root all relative paths resolve against.
    fn root(&self) -> &Path;

    /// Check whether a file or directory exists under the project root.
    fn file_exists(&self, name: &str) -> bool;

    /// Absolute path of an entry under the project root.
    fn resolve(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Check whether a tool can be found on PATH.
    fn has_tool(&mut self, tool: &str) -> bool;

    /// Run a command silently and capture its output.
    fn probe(&mut self, command: &str) -> CommandOutcome;

    /// Run a command attached to the user's terminal.
    fn run(&mut self, command: &str) -> CommandOutcome;

    /// Read `KEY=value` pairs from an env file under the project root.
    fn read_env_file(&self, name: &str) -> Result<HashMap<String, String>>;

    /// Apply variables to the process environment without overwriting
    /// existing ones. Returns how many were set.
    fn apply_env(&mut self, vars: &HashMap<String, String>) -> usize;
}
