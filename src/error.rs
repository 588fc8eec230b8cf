//! Error types for devkick operations.
//!
//! This module defines [`DevkickError`], the error type used throughout the
//! application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes and actions never fail; they return a
//!   [`CommandOutcome`](crate::shell::CommandOutcome) instead
//! - Only failures of the terminal itself (a prompt that cannot be answered)
//!   or of the process environment (no readable working directory) escape
//!   and abort the run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devkick operations.
#[derive(Debug, Error)]
pub enum DevkickError {
    /// An interactive prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// A prompt was required in non-interactive mode with nothing to answer it.
    #[error("Cannot prompt for '{key}' in non-interactive mode (set DEVKICK_PROMPT_{})", .key.to_uppercase())]
    NonInteractivePrompt { key: String },

    /// The env file exists but could not be read.
    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for devkick operations.
pub type Result<T> = std::result::Result<T, DevkickError>;
