//! Listing flags on the built binary, run with an empty home directory.

mod common;

use std::path::Path;
use std::process::{Command, Output};

fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-ai-commit-genie"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("AI_COMMIT_LANG")
        .env_remove("AI_COMMIT_PREFERRED_LLM_PROVIDER")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run git-ai-commit-genie")
}

#[test]
fn test_list_languages_needs_no_config_file() {
    let home = common::temp_test_dir();

    let output = run_cli(home.path(), &["--list-languages"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let codes: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.trim().split(':').next())
        .collect();
    assert_eq!(codes, ["en", "pt", "es", "fr", "de", "zh", "ja", "ru"]);
    assert!(!stdout.contains("No staged changes"));
}

#[test]
fn test_list_providers_marks_default() {
    let home = common::temp_test_dir();

    let output = run_cli(home.path(), &["--list-providers"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("  gemini (default)\n"));
    assert!(stdout.contains("  openai\n"));
    assert!(stdout.contains("  anthropic\n"));
}

#[test]
fn test_missing_config_file_fails_normal_run() {
    let home = common::temp_test_dir();

    let output = run_cli(home.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config file not found"), "stderr: {}", stderr);
}
