//! Ordered execution of checks.

use tracing::{debug, info, warn};

use crate::detection::ProjectType;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::{
    Check, CheckStatus, DockerCheck, EditorCheck, EnvFileCheck, GitCheck, PythonCheck, WebCheck,
};

/// Runs registered checks in registration order.
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

/// Result of one check in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub status: CheckStatus,
}

/// Summary of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub project_type: ProjectType,
    pub results: Vec<CheckReport>,
}

impl RunReport {
    /// Whether the named check ran.
    pub fn ran(&self, name: &str) -> bool {
        self.results.iter().any(|r| r.name == name)
    }

    pub fn status_of(&self, name: &str) -> Option<&CheckStatus> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.status)
    }

    /// Checks that ended in failure, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckReport> {
        self.results.iter().filter(|r| r.status.is_failed())
    }
}

impl CheckRunner {
    /// Create a runner with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a runner with the full startup sequence.
    pub fn with_builtins() -> Self {
        let mut runner = Self::new();
        runner.register(Box::new(EnvFileCheck));
        runner.register(Box::new(GitCheck));
        runner.register(Box::new(DockerCheck));
        runner.register(Box::new(WebCheck));
        runner.register(Box::new(PythonCheck));
        runner.register(Box::new(EditorCheck));
        runner
    }

    /// Append a check to the sequence.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check that applies to `project_type`.
    ///
    /// A failed check never stops the sequence. Only a prompt error aborts
    /// the run, and it is returned as is.
    pub fn run(
        &self,
        project_type: ProjectType,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<RunReport> {
        let mut results = Vec::new();

        for check in &self.checks {
            if !check.applies_to(project_type) {
                debug!("Skipping '{}' for {} project", check.name(), project_type);
                continue;
            }

            debug!("Running check '{}'", check.name());
            let status = check.run(host, ui)?;
            match &status {
                CheckStatus::Failed { reason } => {
                    warn!("Check '{}' failed: {}", check.name(), reason)
                }
                other => debug!("Check '{}' {}", check.name(), other),
            }

            results.push(CheckReport {
                name: check.name().to_string(),
                status,
            });
        }

        info!(
            "Ran {} checks for {} project",
            results.len(),
            project_type
        );

        Ok(RunReport {
            project_type,
            results,
        })
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
