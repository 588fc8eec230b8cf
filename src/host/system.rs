//! The real machine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{apply_to_process, EnvFileParser};
use crate::error::Result;
use crate::shell::{execute_interactive, execute_quiet, locate_tool, CommandOutcome};

use super::Host;

/// [`Host`] backed by the local filesystem, the process environment and
/// the platform shell.
#[derive(Debug, Clone)]
pub struct SystemHost {
    root: PathBuf,
}

impl SystemHost {
    /// Create a host rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Host for SystemHost {
    fn root(&self) -> &Path {
        &self.root
    }

    fn file_exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn has_tool(&mut self, tool: &str) -> bool {
        let root = self.root.clone();
        locate_tool(tool, |cmd| execute_quiet(cmd, Some(&root)))
    }

    fn probe(&mut self, command: &str) -> CommandOutcome {
        execute_quiet(command, Some(&self.root))
    }

    fn run(&mut self, command: &str) -> CommandOutcome {
        execute_interactive(command, Some(&self.root))
    }

    fn read_env_file(&self, name: &str) -> Result<HashMap<String, String>> {
        EnvFileParser::load(&self.root.join(name))
    }

    fn apply_env(&mut self, vars: &HashMap<String, String>) -> usize {
        apply_to_process(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch").unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();

        let host = SystemHost::new(temp.path());

        assert!(host.file_exists("Dockerfile"));
        assert!(host.file_exists("node_modules"));
        assert!(!host.file_exists("package.json"));
    }

    #[test]
    fn resolve_returns_absolute_path_under_root() {
        let temp = TempDir::new().unwrap();
        let host = SystemHost::new(temp.path());
        assert_eq!(host.resolve(".env"), temp.path().join(".env"));
    }

    #[test]
    fn probe_runs_in_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "").unwrap();
        let mut host = SystemHost::new(temp.path());

        let cmd = if cfg!(target_os = "windows") {
            "dir /b"
        } else {
            "ls"
        };
        let outcome = host.probe(cmd);

        assert!(outcome.ok);
        assert!(outcome.text().contains("requirements.txt"));
    }

    #[test]
    fn unknown_tool_is_absent() {
        let temp = TempDir::new().unwrap();
        let mut host = SystemHost::new(temp.path());
        assert!(!host.has_tool("this-command-does-not-exist-12345"));
    }

    #[test]
    fn failing_action_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let mut host = SystemHost::new(temp.path());
        assert!(!host.run("exit 2").ok);
    }

    #[test]
    fn read_env_file_parses_pairs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "API_URL=http://localhost\n").unwrap();
        let host = SystemHost::new(temp.path());

        let vars = host.read_env_file(".env").unwrap();

        assert_eq!(vars.get("API_URL"), Some(&"http://localhost".to_string()));
    }
}
