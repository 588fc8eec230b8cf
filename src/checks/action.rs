//! Confirmed remediation actions.
//!
//! Every action follows one shape: ask, run only if the user accepts, then
//! report. A failed command is reported and never raised.

use tracing::debug;

use crate::error::Result;
use crate::host::Host;
use crate::ui::{Prompt, UserInterface};

use super::CheckStatus;

/// A side-effecting command offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// Prompt key, also used for `DEVKICK_PROMPT_<KEY>` overrides.
    pub key: &'static str,
    /// The yes/no question.
    pub question: &'static str,
    /// Command line run on acceptance.
    pub command: &'static str,
}

impl Action {
    pub const fn new(key: &'static str, question: &'static str, command: &'static str) -> Self {
        Self {
            key,
            question,
            command,
        }
    }
}

/// What happened to an offered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Declined,
    Succeeded,
    Failed,
}

impl ActionOutcome {
    /// Status contribution of this outcome to its check.
    pub fn status(&self, action: &Action) -> CheckStatus {
        match self {
            Self::Failed => CheckStatus::failed(format!("`{}` failed", action.command)),
            Self::Declined | Self::Succeeded => CheckStatus::Passed,
        }
    }
}

/// Ask for confirmation and run the action's command if accepted.
pub fn offer(
    action: &Action,
    host: &mut dyn Host,
    ui: &mut dyn UserInterface,
) -> Result<ActionOutcome> {
    let answer = ui.prompt(&Prompt::confirm(action.key, action.question))?;
    if !answer.as_bool().unwrap_or(false) {
        debug!("'{}' declined", action.key);
        return Ok(ActionOutcome::Declined);
    }

    if host.run(action.command).ok {
        ui.success(&format!("`{}` finished", action.command));
        Ok(ActionOutcome::Succeeded)
    } else {
        ui.error(&format!("`{}` failed", action.command));
        Ok(ActionOutcome::Failed)
    }
}
