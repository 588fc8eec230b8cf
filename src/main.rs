//! DevKick CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devkick::cli::{Cli, CommandDispatcher, CommandResult};
use devkick::config::RuntimeSettings;
use devkick::ui::{create_ui, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level, defaulting to warnings only. Logs go to
/// stderr so stdout carries nothing but check output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devkick=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Dispatch the parsed command against the current directory.
fn run(cli: &Cli, ui: &mut dyn UserInterface) -> devkick::Result<CommandResult> {
    let project_root = std::env::current_dir()?;
    CommandDispatcher::new(project_root).dispatch(cli, ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("DevKick starting with args: {:?}", cli);

    let settings = RuntimeSettings::from_env();
    let mut ui = create_ui(!settings.ci, &settings);

    match run(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
