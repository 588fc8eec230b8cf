//! Environment checks run after project detection.
//!
//! Each check is a [`Check`] implementation. [`CheckRunner`] holds them in
//! their fixed order and drives them one after another:
//!
//! 1. [`EnvFileCheck`] loads `.env` into the process environment
//! 2. [`GitCheck`] reports repository state and offers a pull
//! 3. [`DockerCheck`], [`WebCheck`] or [`PythonCheck`] for the detected type
//! 4. [`EditorCheck`] offers to open the project in VS Code
//!
//! A check reports through the [`UserInterface`] it is given and touches the
//! machine only through its [`Host`], so every check can be exercised with
//! [`MockHost`](crate::host::MockHost) and [`MockUI`](crate::ui::MockUI).
//!
//! # Example
//!
//! ```
//! use devkick::checks::CheckRunner;
//! use devkick::detection::ProjectType;
//! use devkick::host::MockHost;
//! use devkick::ui::MockUI;
//!
//! let mut host = MockHost::new();
//! host.add_file("package.json");
//! host.add_file("node_modules");
//! host.add_tool("node");
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("npm_start", "no");
//!
//! let report = CheckRunner::with_builtins()
//!     .run(ProjectType::Web, &mut host, &mut ui)
//!     .unwrap();
//!
//! assert!(ui.was_prompted("npm_start"));
//! assert!(!ui.was_prompted("npm_install"));
//! assert!(report.ran("web"));
//! ```

pub mod action;
pub mod docker;
pub mod editor;
pub mod env_file;
pub mod git;
pub mod python;
pub mod runner;
pub mod web;

pub use action::{offer, Action, ActionOutcome};
pub use docker::DockerCheck;
pub use editor::EditorCheck;
pub use env_file::EnvFileCheck;
pub use git::GitCheck;
pub use python::PythonCheck;
pub use runner::{CheckReport, CheckRunner, RunReport};
pub use web::WebCheck;

use std::fmt;

use crate::detection::ProjectType;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

/// A single step of the startup sequence.
pub trait Check {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Whether this check runs for the given project type.
    fn applies_to(&self, _project_type: ProjectType) -> bool {
        true
    }

    /// Probe the host, report findings and offer remediation.
    ///
    /// Only prompt failures are returned as errors; every other problem is
    /// reported to the user and folded into the returned status.
    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus>;
}

/// How a check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Everything the check looked at was fine.
    Passed,
    /// The check had nothing to do.
    Skipped { reason: String },
    /// A tool was missing, a precondition failed or an action failed.
    Failed { reason: String },
}

impl CheckStatus {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Keep the first failure, otherwise take `other`'s failure.
    pub fn and(self, other: CheckStatus) -> CheckStatus {
        if !self.is_failed() && other.is_failed() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Skipped { reason } => write!(f, "skipped ({})", reason),
            Self::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}
