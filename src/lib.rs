//! DevKick - One command to kick off your development session.
//!
//! DevKick looks at the current directory, decides whether it holds a
//! Docker, Web (Node.js) or Python project, and walks through a fixed
//! sequence of environment checks. Wherever something can be fixed by a
//! single command it asks first and runs the command only on a yes.
//!
//! # Modules
//!
//! - [`checks`] - The startup checks and the runner that orders them
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` parsing and environment-driven runtime settings
//! - [`detection`] - Project type detection from marker files
//! - [`error`] - Error types and result aliases
//! - [`host`] - Filesystem and process access behind a trait
//! - [`shell`] - Shell command execution and tool lookup
//! - [`ui`] - Status output and prompts
//!
//! # Example
//!
//! ```
//! use devkick::detection::{ProjectDetector, ProjectType};
//! use devkick::host::MockHost;
//!
//! let mut host = MockHost::new();
//! host.add_file("Dockerfile");
//! host.add_file("package.json");
//!
//! let detection = ProjectDetector::detect(&host);
//! assert_eq!(detection.project_type, ProjectType::Docker);
//! assert_eq!(detection.marker, Some("Dockerfile"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod host;
pub mod shell;
pub mod ui;

pub use error::{DevkickError, Result};
