//! Shell command execution.
//!
//! Every function here is non-throwing: spawn errors and non-zero exits are
//! folded into a [`CommandOutcome`] with `ok == false`, so callers treat
//! "tool absent" and "tool failed" the same way.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::platform::{shell_executable, shell_flag};

/// Outcome of a probe or an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Whether the command ran and exited with status 0.
    pub ok: bool,

    /// Trimmed standard output. Only present for captured (probe) runs.
    pub output: Option<String>,
}

impl CommandOutcome {
    /// A successful run with captured output.
    pub fn captured(output: impl Into<String>) -> Self {
        Self {
            ok: true,
            output: Some(output.into()),
        }
    }

    /// A successful run that inherited the terminal.
    pub fn passed() -> Self {
        Self {
            ok: true,
            output: None,
        }
    }

    /// A failed run (non-zero exit or spawn error).
    pub fn failed() -> Self {
        Self::default()
    }

    /// Captured output, or the empty string.
    pub fn text(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }

    /// True when the run succeeded and printed something.
    pub fn has_output(&self) -> bool {
        self.ok && !self.text().is_empty()
    }
}

fn shell_command(command: &str, cwd: Option<&Path>) -> Command {
    let shell = shell_executable();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag()).arg(command);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

/// Run a command silently, capturing and trimming its stdout.
pub fn execute_quiet(command: &str, cwd: Option<&Path>) -> CommandOutcome {
    let output = shell_command(command, cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            debug!("probe `{}` succeeded", command);
            CommandOutcome::captured(stdout)
        }
        Ok(output) => {
            debug!("probe `{}` exited with {:?}", command, output.status.code());
            CommandOutcome::failed()
        }
        Err(e) => {
            debug!("probe `{}` could not start: {}", command, e);
            CommandOutcome::failed()
        }
    }
}

/// Run a command attached to the user's terminal.
pub fn execute_interactive(command: &str, cwd: Option<&Path>) -> CommandOutcome {
    let status = shell_command(command, cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) if status.success() => {
            debug!("action `{}` succeeded", command);
            CommandOutcome::passed()
        }
        Ok(status) => {
            debug!("action `{}` exited with {:?}", command, status.code());
            CommandOutcome::failed()
        }
        Err(e) => {
            debug!("action `{}` could not start: {}", command, e);
            CommandOutcome::failed()
        }
    }
}

/// Look a tool up with `which`, falling back to `where`.
///
/// Either lookup succeeding is enough, so the same code works with POSIX
/// and Windows semantics.
pub fn locate_tool<F>(tool: &str, mut probe: F) -> bool
where
    F: FnMut(&str) -> CommandOutcome,
{
    probe(&format!("which {}", tool)).has_output() || probe(&format!("where {}", tool)).has_output()
}
