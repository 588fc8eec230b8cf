//! Platform-specific shell selection.

use std::path::PathBuf;

/// The shell used to run probe and action command lines.
pub fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

/// Flag that passes a command line to [`shell_executable`].
///
/// Plain `-c`, not a login shell: profile scripts may print text, which
/// would end up in captured probe output. PATH is inherited from the
/// user's shell, so version-manager shims are already visible.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
