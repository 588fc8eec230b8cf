//! Mock host for testing.
//!
//! `MockHost` implements the [`Host`] trait with an in-memory project
//! directory, a scripted set of installed tools and scripted probe results.
//! Every probe and action is recorded for later assertion.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::config::EnvFileParser;
use crate::error::{DevkickError, Result};
use crate::shell::CommandOutcome;

use super::Host;

/// Mock host implementation for testing.
///
/// Unscripted probes fail and unscripted actions succeed, so a bare
/// `MockHost` looks like a machine where nothing is set up yet.
#[derive(Debug)]
pub struct MockHost {
    root: PathBuf,
    files: HashSet<String>,
    tools: HashSet<String>,
    probe_results: HashMap<String, CommandOutcome>,
    run_results: HashMap<String, CommandOutcome>,
    env_files: HashMap<String, String>,
    probes: Vec<String>,
    runs: Vec<String>,
    tool_lookups: Vec<String>,
    applied_env: HashMap<String, String>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// Create an empty mock host rooted at `/project`.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/project"),
            files: HashSet::new(),
            tools: HashSet::new(),
            probe_results: HashMap::new(),
            run_results: HashMap::new(),
            env_files: HashMap::new(),
            probes: Vec::new(),
            runs: Vec::new(),
            tool_lookups: Vec::new(),
            applied_env: HashMap::new(),
        }
    }

    /// Mark a file or directory as present in the project root.
    pub fn add_file(&mut self, name: &str) {
        self.files.insert(name.to_string());
    }

    /// Add an env file with the given content.
    pub fn add_env_file(&mut self, name: &str, content: &str) {
        self.add_file(name);
        self.env_files.insert(name.to_string(), content.to_string());
    }

    /// Mark a tool as installed.
    pub fn add_tool(&mut self, tool: &str) {
        self.tools.insert(tool.to_string());
    }

    /// Script the outcome of a probe.
    pub fn set_probe(&mut self, command: &str, outcome: CommandOutcome) {
        self.probe_results.insert(command.to_string(), outcome);
    }

    /// Script the outcome of an action.
    pub fn set_run(&mut self, command: &str, outcome: CommandOutcome) {
        self.run_results.insert(command.to_string(), outcome);
    }

    /// Get all probes that were run, in order.
    pub fn probes(&self) -> &[String] {
        &self.probes
    }

    /// Get all actions that were run, in order.
    pub fn runs(&self) -> &[String] {
        &self.runs
    }

    /// Get all tool lookups, in order.
    pub fn tool_lookups(&self) -> &[String] {
        &self.tool_lookups
    }

    /// Check if an action was run.
    pub fn has_run(&self, command: &str) -> bool {
        self.runs.iter().any(|r| r == command)
    }

    /// Variables applied through [`Host::apply_env`].
    pub fn applied_env(&self) -> &HashMap<String, String> {
        &self.applied_env
    }
}

impl Host for MockHost {
    fn root(&self) -> &Path {
        &self.root
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    fn has_tool(&mut self, tool: &str) -> bool {
        self.tool_lookups.push(tool.to_string());
        self.tools.contains(tool)
    }

    fn probe(&mut self, command: &str) -> CommandOutcome {
        self.probes.push(command.to_string());
        self.probe_results
            .get(command)
            .cloned()
            .unwrap_or_else(CommandOutcome::failed)
    }

    fn run(&mut self, command: &str) -> CommandOutcome {
        self.runs.push(command.to_string());
        self.run_results
            .get(command)
            .cloned()
            .unwrap_or_else(CommandOutcome::passed)
    }

    fn read_env_file(&self, name: &str) -> Result<HashMap<String, String>> {
        match self.env_files.get(name) {
            Some(content) => Ok(EnvFileParser::parse(content)),
            None => Err(DevkickError::EnvFile {
                path: self.resolve(name),
                message: "not readable".to_string(),
            }),
        }
    }

    fn apply_env(&mut self, vars: &HashMap<String, String>) -> usize {
        let mut applied = 0;
        for (key, value) in vars {
            if !self.applied_env.contains_key(key) {
                self.applied_env.insert(key.clone(), value.clone());
                applied += 1;
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_probe_fails_and_is_recorded() {
        let mut host = MockHost::new();
        assert!(!host.probe("docker info").ok);
        assert_eq!(host.probes(), &["docker info".to_string()]);
    }

    #[test]
    fn scripted_probe_returns_outcome() {
        let mut host = MockHost::new();
        host.set_probe("git status --porcelain", CommandOutcome::captured(" M a.rs"));
        assert_eq!(host.probe("git status --porcelain").text(), " M a.rs");
    }

    #[test]
    fn unscripted_action_succeeds() {
        let mut host = MockHost::new();
        assert!(host.run("npm install").ok);
        assert!(host.has_run("npm install"));
    }

    #[test]
    fn scripted_action_can_fail() {
        let mut host = MockHost::new();
        host.set_run("git pull", CommandOutcome::failed());
        assert!(!host.run("git pull").ok);
    }

    #[test]
    fn tools_and_files_are_scripted() {
        let mut host = MockHost::new();
        host.add_tool("git");
        host.add_file("Dockerfile");

        assert!(host.has_tool("git"));
        assert!(!host.has_tool("docker"));
        assert!(host.file_exists("Dockerfile"));
        assert!(!host.file_exists("package.json"));
        assert_eq!(host.tool_lookups(), &["git".to_string(), "docker".to_string()]);
    }

    #[test]
    fn env_file_is_parsed_and_applied() {
        let mut host = MockHost::new();
        host.add_env_file(".env", "A=1\nB=2");

        let vars = host.read_env_file(".env").unwrap();
        let applied = host.apply_env(&vars);

        assert_eq!(applied, 2);
        assert_eq!(host.applied_env().get("A"), Some(&"1".to_string()));
    }

    #[test]
    fn unreadable_env_file_is_an_error() {
        let mut host = MockHost::new();
        host.add_file(".env");
        assert!(host.read_env_file(".env").is_err());
    }
}
