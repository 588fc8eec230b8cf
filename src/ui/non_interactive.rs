//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{DevkickError, Result};

use super::{parse_confirm, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `DEVKICK_PROMPT_<KEY>` overrides. Without an
/// override, confirmations are declined so unattended runs never install
/// or start anything, and selections take their default.
pub struct NonInteractiveUI {
    overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI with prompt overrides keyed by
    /// upper-cased prompt key.
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    fn resolve(&self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self.overrides.get(&prompt.key.to_uppercase());

        match &prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(
                answer.map(|a| parse_confirm(a)).unwrap_or(false),
            )),
            PromptType::Select { options } => {
                let choice = answer
                    .and_then(|a| {
                        options
                            .iter()
                            .find(|o| o.value.eq_ignore_ascii_case(a.trim()))
                    })
                    .map(|o| o.value.clone())
                    .or_else(|| prompt.default.clone())
                    .or_else(|| options.first().map(|o| o.value.clone()));

                choice
                    .map(PromptResult::String)
                    .ok_or_else(|| DevkickError::NonInteractivePrompt {
                        key: prompt.key.clone(),
                    })
            }
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("🚀 {}", title);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let result = self.resolve(prompt)?;
        debug!("answered '{}' with {}", prompt.key, result.as_string());
        println!("{} {}", prompt.question, result.as_string());
        Ok(result)
    }
}
