//! `.env` loading.

use tracing::{debug, warn};

use crate::config::ENV_FILE;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::{Check, CheckStatus};

/// Loads the project's `.env` file into the process environment.
///
/// Prints a single success line when the file is found. Variables that are
/// already set keep their value.
pub struct EnvFileCheck;

impl Check for EnvFileCheck {
    fn name(&self) -> &str {
        "env-file"
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if !host.file_exists(ENV_FILE) {
            return Ok(CheckStatus::skipped("no .env file"));
        }

        let path = host.resolve(ENV_FILE);
        ui.success(&format!("Found .env file at {}", path.display()));

        match host.read_env_file(ENV_FILE) {
            Ok(vars) => {
                let applied = host.apply_env(&vars);
                debug!("loaded {} of {} variables from .env", applied, vars.len());
                Ok(CheckStatus::Passed)
            }
            Err(e) => {
                warn!("{}", e);
                ui.warning(&format!("Could not load .env: {}", e));
                Ok(CheckStatus::failed("unreadable .env file"))
            }
        }
    }
}
