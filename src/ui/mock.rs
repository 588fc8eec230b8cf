//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use devkick::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("git_pull", "no");
//!
//! let answer = ui.prompt(&Prompt::confirm("git_pull", "Pull updates from remote?")).unwrap();
//! ui.success("Done!");
//!
//! assert_eq!(answer.as_bool(), Some(false));
//! assert!(ui.was_prompted("git_pull"));
//! assert!(ui.has_success("Done!"));
//! ```

use std::collections::HashMap;

use crate::error::{DevkickError, Result};

use super::{parse_confirm, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Unconfigured prompts fall back to their default, so confirmations are
/// accepted unless a test says otherwise.
#[derive(Debug, Default)]
pub struct MockUI {
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompt_responses: HashMap<String, String>,
    failing_prompts: Vec<String>,
    prompts: Vec<Prompt>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make the prompt with this key fail as if the terminal went away.
    pub fn fail_prompt(&mut self, key: &str) {
        self.failing_prompts.push(key.to_string());
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown, in order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Get the keys of all prompts that were shown, in order.
    pub fn prompts_shown(&self) -> Vec<&str> {
        self.prompts.iter().map(|p| p.key.as_str()).collect()
    }

    /// Check if a prompt with this key was shown.
    pub fn was_prompted(&self, key: &str) -> bool {
        self.prompts.iter().any(|p| p.key == key)
    }

    /// Check if a specific info message was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Total number of lines written, across all channels.
    pub fn output_count(&self) -> usize {
        self.infos.len()
            + self.successes.len()
            + self.warnings.len()
            + self.errors.len()
            + self.headers.len()
    }

    fn answer(prompt: &Prompt, response: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_confirm(response)),
            PromptType::Select { .. } => PromptResult::String(response.to_string()),
        }
    }
}

impl UserInterface for MockUI {
    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts.push(prompt.clone());

        if self.failing_prompts.contains(&prompt.key) {
            return Err(DevkickError::Prompt {
                message: format!("no terminal for '{}'", prompt.key),
            });
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(Self::answer(prompt, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        // Return sensible defaults
        match &prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(false)),
            PromptType::Select { options } => Ok(PromptResult::String(
                options.first().map(|o| o.value.clone()).unwrap_or_default(),
            )),
        }
    }
}
