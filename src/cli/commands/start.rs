//! Start command implementation.
//!
//! The `devkick start` command detects the project type and runs the
//! startup checks for it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checks::{CheckRunner, RunReport};
use crate::detection::ProjectDetector;
use crate::error::Result;
use crate::host::{Host, SystemHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The start command implementation.
pub struct StartCommand {
    project_root: PathBuf,
}

impl StartCommand {
    /// Create a new start command for the given project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Run detection and every applicable check against `host`.
    pub fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<RunReport> {
        ui.show_header("Starting DevKick checks...");

        let project_type = ProjectDetector::resolve(host, ui)?;
        ui.info(&format!("Detected project: {}", project_type));

        let report = CheckRunner::with_builtins().run(project_type, host, ui)?;

        ui.success("DevKick complete! Ready to code.");
        Ok(report)
    }
}

impl Command for StartCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!("Starting in {}", self.project_root.display());
        let mut host = SystemHost::new(&self.project_root);

        let report = self.run(&mut host, ui)?;
        debug!(
            "{} of {} checks failed",
            report.failures().count(),
            report.results.len()
        );

        // Check failures are reported as they happen and never change the exit code.
        Ok(CommandResult::success())
    }
}
