//! Node.js projects.

use crate::detection::ProjectType;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::action::{offer, Action};
use super::{Check, CheckStatus};

const MANIFEST: &str = "package.json";
const DEPENDENCY_DIR: &str = "node_modules";

const INSTALL: Action = Action::new("npm_install", "Install dependencies?", "npm install");
const START: Action = Action::new("npm_start", "Start the dev server?", "npm start");

/// Checks the Node.js runtime, installs dependencies and starts the dev
/// server on request.
pub struct WebCheck;

impl Check for WebCheck {
    fn name(&self) -> &str {
        "web"
    }

    fn applies_to(&self, project_type: ProjectType) -> bool {
        project_type == ProjectType::Web
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if !host.has_tool("node") {
            ui.error("Node.js not installed");
            return Ok(CheckStatus::failed("node not installed"));
        }

        ui.success("Node.js installed");

        if !host.file_exists(MANIFEST) {
            ui.error("No package.json found");
            return Ok(CheckStatus::failed("no package.json"));
        }

        let mut status = CheckStatus::Passed;

        if !host.file_exists(DEPENDENCY_DIR) {
            let outcome = offer(&INSTALL, host, ui)?;
            status = status.and(outcome.status(&INSTALL));
        }

        let outcome = offer(&START, host, ui)?;
        Ok(status.and(outcome.status(&START)))
    }
}
