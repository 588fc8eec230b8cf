//! Integration tests for the `devkick` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(files: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in files {
        fs::write(temp.path().join(file), "").unwrap();
    }
    temp
}

/// A `start` invocation that never waits for input.
fn start_in(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("devkick"));
    cmd.arg("start")
        .current_dir(temp.path())
        .env("CI", "1")
        .env_remove("DEVKICK_PROMPT_PROJECT_TYPE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devkick"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kick off your development session"))
        .stdout(predicate::str::contains("Run startup checks for your project"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devkick"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_subcommand_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devkick"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devkick"));
    cmd.arg("stop");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn start_detects_web_project() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&["package.json"]);
    fs::create_dir(temp.path().join("node_modules"))?;

    start_in(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting DevKick checks..."))
        .stdout(predicate::str::contains("Detected project: Web"))
        .stdout(predicate::str::contains("Install dependencies?").not())
        .stdout(predicate::str::contains("DevKick complete! Ready to code."));
    Ok(())
}

#[test]
fn start_prefers_docker_over_other_markers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&["Dockerfile", "package.json", "requirements.txt"]);

    start_in(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected project: Docker"))
        .stdout(predicate::str::contains("Run docker-compose up?").not());
    Ok(())
}

#[test]
fn start_detects_python_from_pyproject() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&["pyproject.toml"]);

    start_in(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected project: Python"))
        .stdout(predicate::str::contains("Install Python dependencies?").not());
    Ok(())
}

#[test]
fn start_without_markers_uses_prompt_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    start_in(&temp)
        .env("DEVKICK_PROMPT_PROJECT_TYPE", "python")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Couldn't detect project type. What are you working on? Python",
        ))
        .stdout(predicate::str::contains("Detected project: Python"));
    Ok(())
}

#[test]
fn start_without_markers_falls_back_to_first_choice() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    start_in(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected project: Docker"));
    Ok(())
}

#[test]
fn start_reports_missing_package_json_and_finishes() -> Result<(), Box<dyn std::error::Error>>
{
    let temp = setup_project(&[]);

    // Web without a manifest can only be reached through the prompt.
    start_in(&temp)
        .env("DEVKICK_PROMPT_PROJECT_TYPE", "Web")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected project: Web"))
        .stdout(predicate::str::contains("DevKick complete! Ready to code."));
    Ok(())
}

#[test]
fn start_loads_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&["requirements.txt"]);
    fs::write(temp.path().join(".env"), "DEVKICK_CLI_TEST_TOKEN=abc123\n")?;

    start_in(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Found .env file at"))
        .stdout(predicate::str::contains(".env"));
    Ok(())
}

#[test]
fn start_declines_actions_when_unattended() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&["requirements.txt"]);

    start_in(&temp)
        .env_remove("DEVKICK_PROMPT_PIP_INSTALL")
        .assert()
        .success()
        .stdout(predicate::str::contains("finished").not());
    Ok(())
}
