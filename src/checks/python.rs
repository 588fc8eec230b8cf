//! Python projects.

use crate::detection::ProjectType;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::action::{offer, Action};
use super::{Check, CheckStatus};

const REQUIREMENTS: &str = "requirements.txt";

const VENV_HINT: &str = "python3 -m venv .venv && source .venv/bin/activate";

/// Interpreter candidates in lookup order, each with its install action.
const INTERPRETERS: &[(&str, Action)] = &[
    (
        "python3",
        Action::new(
            "pip_install",
            "Install Python dependencies?",
            "python3 -m pip install -r requirements.txt",
        ),
    ),
    (
        "python",
        Action::new(
            "pip_install",
            "Install Python dependencies?",
            "python -m pip install -r requirements.txt",
        ),
    ),
];

/// Checks for a Python interpreter and offers to install requirements.
pub struct PythonCheck;

impl Check for PythonCheck {
    fn name(&self) -> &str {
        "python"
    }

    fn applies_to(&self, project_type: ProjectType) -> bool {
        project_type == ProjectType::Python
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let Some(install) = INTERPRETERS
            .iter()
            .find(|(binary, _)| host.has_tool(binary))
            .map(|(_, action)| *action)
        else {
            ui.error("Python not installed");
            return Ok(CheckStatus::failed("python not installed"));
        };

        ui.success("Python installed");

        let mut status = CheckStatus::Passed;
        if host.file_exists(REQUIREMENTS) {
            let outcome = offer(&install, host, ui)?;
            status = outcome.status(&install);
        }

        ui.info(&format!("For virtual env, run: {}", VENV_HINT));

        Ok(status)
    }
}
