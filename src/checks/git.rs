//! Git repository state.

use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::action::{offer, Action};
use super::{Check, CheckStatus};

const PULL: Action = Action::new("git_pull", "Pull updates from remote?", "git pull");

/// Reports whether the project is a git repository with local changes and
/// offers to pull.
pub struct GitCheck;

impl Check for GitCheck {
    fn name(&self) -> &str {
        "git"
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if !host.has_tool("git") {
            ui.error("Git not installed");
            return Ok(CheckStatus::failed("git not installed"));
        }

        if !host.probe("git rev-parse --is-inside-work-tree").has_output() {
            ui.warning("No Git repository found.");
            return Ok(CheckStatus::skipped("not a git repository"));
        }

        ui.success("Git repository detected");

        if host.probe("git status --porcelain").has_output() {
            ui.warning("Uncommitted changes detected.");
        }

        let outcome = offer(&PULL, host, ui)?;
        Ok(outcome.status(&PULL))
    }
}
