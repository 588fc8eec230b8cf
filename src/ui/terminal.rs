//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::config::RuntimeSettings;
use crate::error::Result;

use super::theme::should_use_colors;
use super::{prompt_user, DevkickTheme, NonInteractiveUI, Prompt, PromptResult, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DevkickTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(no_color: bool) -> Self {
        let theme = if should_use_colors(no_color) {
            DevkickTheme::new()
        } else {
            DevkickTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn info(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let styled = Prompt {
            question: self.theme.prompt.apply_to(&prompt.question).to_string(),
            ..prompt.clone()
        };
        prompt_user(&styled, &self.term)
    }
}

/// Create the appropriate UI based on context.
///
/// The terminal UI is used only when asked for and stdout is a terminal;
/// everything else gets the non-interactive UI.
pub fn create_ui(interactive: bool, settings: &RuntimeSettings) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(settings.no_color))
    } else {
        Box::new(NonInteractiveUI::new(settings.prompt_overrides.clone()))
    }
}
