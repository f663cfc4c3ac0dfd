// tests/integration_test.rs
use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn autorelease() -> Command {
    Command::new(env!("CARGO_BIN_EXE_autorelease"))
}

#[test]
fn test_autorelease_help() {
    let output = autorelease()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("autorelease"));
    assert!(stdout.contains("--tag-prefix"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_autorelease_version() {
    let output = autorelease()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_notes_prints_changelog_section() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("CHANGELOG.md"),
        "# Changelog\n\n## [0.2.0]\n\n- Second\n\n## [0.1.0]\n\n- First\n",
    )
    .unwrap();

    let output = autorelease()
        .args(["--notes", "0.1.0"])
        .current_dir(dir.path())
        .env_remove("GITHUB_TOKEN")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "- First\n");
}

#[test]
fn test_notes_without_changelog_uses_fallback() {
    let dir = TempDir::new().unwrap();

    let output = autorelease()
        .args(["--notes", "1.0.0"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Release 1.0.0\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Changelog not found"));
}

#[test]
fn test_invalid_repository_fails() {
    let dir = TempDir::new().unwrap();

    let output = autorelease()
        .args(["--repository", "not-a-slug"])
        .current_dir(dir.path())
        .env("GITHUB_TOKEN", "ghp_test")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("owner/repo"));
}

#[test]
fn test_missing_token_fails_even_when_nothing_to_release() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"version":"1.0.0"}"#).unwrap();
    let output_file = dir.path().join("outputs.txt");

    let output = autorelease()
        .args(["--repository", "octo/demo"])
        .arg("--output-file")
        .arg(&output_file)
        .current_dir(dir.path())
        .env_remove("GITHUB_TOKEN")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("auth token is required"));
    assert!(!output_file.exists());
}

#[test]
fn test_empty_token_is_rejected() {
    let dir = TempDir::new().unwrap();

    let output = autorelease()
        .args(["--dry-run", "--repository", "octo/demo"])
        .current_dir(dir.path())
        .env("GITHUB_TOKEN", "")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("auth token is required"));
}
