//! Library integration tests.

use std::fs;

use devkick::checks::{Check, CheckRunner, CheckStatus, EnvFileCheck};
use devkick::detection::{ProjectDetector, ProjectType};
use devkick::host::{Host, MockHost, SystemHost};
use devkick::ui::MockUI;
use devkick::DevkickError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = DevkickError::NonInteractivePrompt {
        key: "project_type".into(),
    };
    assert!(err.to_string().contains("DEVKICK_PROMPT_PROJECT_TYPE"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devkick::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use devkick::cli::{Cli, Commands};

    let cli = Cli::parse_from(["devkick", "start"]);
    assert_eq!(cli.command, Commands::Start);
}

#[test]
fn detection_reads_the_real_filesystem() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pyproject.toml"), "[project]\n").unwrap();
    let host = SystemHost::new(temp.path());

    let detection = ProjectDetector::detect(&host);

    assert_eq!(detection.project_type, ProjectType::Python);
    assert_eq!(detection.marker, Some("pyproject.toml"));
}

#[test]
fn env_file_is_applied_to_the_process() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "# local settings\nDEVKICK_LIB_TEST_URL=postgres://localhost/dev\nexport DEVKICK_LIB_TEST_MODE=\"debug\"\n",
    )
    .unwrap();
    let mut host = SystemHost::new(temp.path());
    let mut ui = MockUI::new();

    let status = EnvFileCheck.run(&mut host, &mut ui).unwrap();

    assert_eq!(status, CheckStatus::Passed);
    assert_eq!(
        std::env::var("DEVKICK_LIB_TEST_URL").as_deref(),
        Ok("postgres://localhost/dev")
    );
    assert_eq!(std::env::var("DEVKICK_LIB_TEST_MODE").as_deref(), Ok("debug"));
    assert_eq!(ui.successes().len(), 1);
    assert!(ui.has_success(".env"));
}

#[test]
fn env_file_with_nul_byte_does_not_abort_the_check() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "DEVKICK_LIB_TEST_BINARY=a\0b\nDEVKICK_LIB_TEST_TEXT=plain\n",
    )
    .unwrap();
    let mut host = SystemHost::new(temp.path());
    let mut ui = MockUI::new();

    let status = EnvFileCheck.run(&mut host, &mut ui).unwrap();

    assert_eq!(status, CheckStatus::Passed);
    assert!(std::env::var_os("DEVKICK_LIB_TEST_BINARY").is_none());
    assert_eq!(std::env::var("DEVKICK_LIB_TEST_TEXT").as_deref(), Ok("plain"));
}

#[test]
fn env_file_does_not_override_existing_variables() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "DEVKICK_LIB_TEST_KEEP=from-file\n").unwrap();
    std::env::set_var("DEVKICK_LIB_TEST_KEEP", "from-shell");
    let mut host = SystemHost::new(temp.path());
    let mut ui = MockUI::new();

    EnvFileCheck.run(&mut host, &mut ui).unwrap();

    assert_eq!(
        std::env::var("DEVKICK_LIB_TEST_KEEP").as_deref(),
        Ok("from-shell")
    );
}

#[test]
fn system_host_reports_command_outcomes() {
    let temp = TempDir::new().unwrap();
    let mut host = SystemHost::new(temp.path());

    assert!(host.probe("exit 0").ok);
    assert!(!host.probe("exit 3").ok);
    assert!(!host.has_tool("devkick-no-such-tool-xyz"));
}

#[test]
fn full_run_with_scripted_host() {
    let mut host = MockHost::new();
    host.add_file("Dockerfile");
    host.add_file("docker-compose.yml");
    host.add_tool("docker");
    let mut ui = MockUI::new();
    ui.set_prompt_response("docker_start", "no");

    let project_type = ProjectDetector::resolve(&host, &mut ui).unwrap();
    let report = CheckRunner::with_builtins()
        .run(project_type, &mut host, &mut ui)
        .unwrap();

    assert_eq!(project_type, ProjectType::Docker);
    assert_eq!(ui.prompts_shown(), vec!["docker_start", "compose_up"]);
    assert!(host.has_run("docker compose up -d"));
    assert!(report.status_of("docker").is_some_and(|s| s.is_failed()));
    assert!(report.ran("editor"));
}
