//! Editor launch.

use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::action::{offer, Action};
use super::{Check, CheckStatus};

const OPEN: Action = Action::new("open_editor", "Open project in VS Code?", "code .");

/// Offers to open the project in VS Code when its launcher is on `PATH`.
pub struct EditorCheck;

impl Check for EditorCheck {
    fn name(&self) -> &str {
        "editor"
    }

    fn run(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if !host.has_tool("code") {
            return Ok(CheckStatus::skipped("vs code not installed"));
        }

        let outcome = offer(&OPEN, host, ui)?;
        Ok(outcome.status(&OPEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::ui::MockUI;

    #[test]
    fn missing_code_is_silent() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();

        let status = EditorCheck.run(&mut host, &mut ui).unwrap();

        assert_eq!(status, CheckStatus::skipped("vs code not installed"));
        assert_eq!(ui.output_count(), 0);
        assert!(ui.prompts().is_empty());
    }

    #[test]
    fn accepted_prompt_opens_editor() {
        let mut host = MockHost::new();
        host.add_tool("code");
        let mut ui = MockUI::new();

        EditorCheck.run(&mut host, &mut ui).unwrap();

        assert!(ui.was_prompted("open_editor"));
        assert!(host.has_run("code ."));
        assert!(ui.has_success("`code .` finished"));
    }

    #[test]
    fn declined_prompt_runs_nothing() {
        let mut host = MockHost::new();
        host.add_tool("code");
        let mut ui = MockUI::new();
        ui.set_prompt_response("open_editor", "n");

        EditorCheck.run(&mut host, &mut ui).unwrap();

        assert!(host.runs().is_empty());
    }
}
