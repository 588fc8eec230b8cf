//! Configuration for devkick.
//!
//! devkick reads no configuration file of its own. This module covers:
//! - Project `.env` files in [`env_file`], loaded into the process environment
//! - Environment-variable driven settings in [`runtime`]

pub mod env_file;
pub mod runtime;

pub use env_file::{apply_to_process, EnvFileParser, ENV_FILE};
pub use runtime::{RuntimeSettings, PROMPT_ENV_PREFIX};
