//! Runtime settings read from environment variables.
//!
//! devkick has no config file. Everything that varies between runs comes
//! from the environment:
//!
//! - `NO_COLOR` disables styled output
//! - `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`
//!   force non-interactive mode
//! - `DEVKICK_PROMPT_<KEY>` answers the prompt `<key>` in non-interactive mode

use std::collections::HashMap;

/// Prefix of variables that answer prompts in non-interactive mode.
pub const PROMPT_ENV_PREFIX: &str = "DEVKICK_PROMPT_";

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Settings resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct RuntimeSettings {
    /// Running under a CI system.
    pub ci: bool,

    /// `NO_COLOR` is set.
    pub no_color: bool,

    /// Prompt answers keyed by upper-cased prompt key.
    pub prompt_overrides: HashMap<String, String>,
}

impl RuntimeSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build settings from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings = Self::default();

        for (key, value) in vars {
            if CI_VARS.contains(&key.as_str()) {
                settings.ci = true;
            } else if key == "NO_COLOR" {
                settings.no_color = true;
            } else if let Some(prompt_key) = key.strip_prefix(PROMPT_ENV_PREFIX) {
                settings
                    .prompt_overrides
                    .insert(prompt_key.to_uppercase(), value);
            }
        }

        settings
    }

    /// Look up the override for a prompt key.
    pub fn prompt_override(&self, key: &str) -> Option<&str> {
        self.prompt_overrides
            .get(&key.to_uppercase())
            .map(String::as_str)
    }
}
