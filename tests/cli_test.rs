// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_manifest-semver"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("manifest-semver"));
    assert!(stdout.contains("semantic versions"));
}

#[test]
fn test_bump_default_manifest() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"version":"1.2.3"}"#).unwrap();

    let output = run(dir.path(), &["bump", "minor"]);

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert_eq!(written, "{\n\t\"version\": \"1.3.0\"\n}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("package.json : "));
    assert!(stdout.contains("1.3.0"));
}

#[test]
fn test_unknown_part_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"version":"1.2.3"}"#;
    fs::write(dir.path().join("package.json"), original).unwrap();

    let output = run(dir.path(), &["bump", "patchwork"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown part 'patchwork'"));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        original
    );
}

#[test]
fn test_unknown_phase_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["release"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown phase 'release'"));
}

#[test]
fn test_validate_inline_with_build() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["validate", "v2.0.0", "--build", "sha.1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2.0.0+sha.1"));
}

#[test]
fn test_per_file_failure_is_a_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"name":"a"}"#).unwrap();

    let output = run(dir.path(), &["set", "1.0.0", "-f", "a.json"]);
    assert!(output.status.success());

    let strict = run(dir.path(), &["set", "1.0.0", "-f", "a.json", "--fail-on-warning"]);
    assert!(!strict.status.success());
}

#[test]
fn test_set_with_dest_and_indent() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"version":"1.0.0"}"#).unwrap();

    let output = run(
        dir.path(),
        &["set", "3.0.0", "-f", "a.json", "-d", "out/a.json", "--indent", "  "],
    );

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("out/a.json")).unwrap(),
        "{\n  \"version\": \"3.0.0\"\n}"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("a.json")).unwrap(),
        r#"{"version":"1.0.0"}"#
    );
}

#[test]
fn test_files_from_local_config() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pkgs/a")).unwrap();
    fs::create_dir_all(dir.path().join("pkgs/b")).unwrap();
    fs::write(dir.path().join("pkgs/a/package.json"), r#"{"version":"0.1.0"}"#).unwrap();
    fs::write(dir.path().join("pkgs/b/package.json"), r#"{"version":"0.2.0"}"#).unwrap();
    fs::write(
        dir.path().join("semver.toml"),
        "[options]\nindent = \" \"\n\n[[files]]\nsrc = [\"pkgs/*/package.json\"]\n",
    )
    .unwrap();

    let output = run(dir.path(), &["bump", "major"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("pkgs/a/package.json")).unwrap(),
        "{\n \"version\": \"1.0.0\"\n}"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("pkgs/b/package.json")).unwrap(),
        "{\n \"version\": \"1.0.0\"\n}"
    );
}

#[test]
fn test_dest_with_config_files_is_rejected() {
    let dir = TempDir::new().unwrap();
    let content = r#"{"version":"0.1.0"}"#;
    fs::write(dir.path().join("package.json"), content).unwrap();
    fs::write(
        dir.path().join("semver.toml"),
        "[[files]]\nsrc = [\"package.json\"]\n",
    )
    .unwrap();

    let output = run(dir.path(), &["bump", "patch", "-d", "out.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--dest"));
    assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), content);
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_bad_config_glob_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("semver.toml"), "[[files]]\nsrc = [\"pkgs/[\"]\n").unwrap();

    let output = run(dir.path(), &["bump", "patch"]);

    assert!(!output.status.success());
}
