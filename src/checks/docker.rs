//! Docker engine and compose stack.

use crate::detection::ProjectType;
use crate::error::Result;
use crate::host::Host;
use crate::ui::{Prompt, UserInterface};

use super::action::{offer, Action};
use super::{Check, CheckStatus};

const COMPOSE_FILE: &str = "docker-compose.yml";

const COMPOSE_UP: Action = Action::new(
    "compose_up",
    "Run docker-compose up?",
    "docker-compose up -d",
);

/// Same prompt, for machines that only have the compose plugin.
const COMPOSE_PLUGIN_UP: Action = Action::new(
    "compose_up",
    "Run docker-compose up?",
    "docker compose up -d",
);

/// Checks the Docker CLI and daemon and offers to start the compose stack.
pub struct DockerCheck;

impl DockerCheck {
    fn check_daemon(host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if host.probe("docker info").ok {
            ui.success("Docker daemon is running");
            return Ok(CheckStatus::Passed);
        }

        // There is no portable way to start the daemon, so only guide.
        let start = ui.prompt(&Prompt::confirm(
            "docker_start",
            "Docker daemon not running. Start it?",
        ))?;
        if start.as_bool().unwrap_or(false) {
            ui.info("Please start Docker manually (e.g., Docker Desktop on Windows/Mac).");
        }

        Ok(CheckStatus::failed("docker daemon not running"))
    }
}

impl Check for DockerCheck {
    fn name(&self) -> &str {
        "docker"
    }

    fn applies_to(&self, project_type: ProjectType) -> bool {
        project_type == ProjectType::Docker
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if !host.has_tool("docker") {
            ui.error("Docker not installed");
            return Ok(CheckStatus::failed("docker not installed"));
        }

        let mut status = Self::check_daemon(host, ui)?;

        if host.file_exists(COMPOSE_FILE) {
            let action = if host.has_tool("docker-compose") {
                COMPOSE_UP
            } else {
                COMPOSE_PLUGIN_UP
            };
            let outcome = offer(&action, host, ui)?;
            status = status.and(outcome.status(&action));
        }

        Ok(status)
    }
}
