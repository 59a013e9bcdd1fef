//! Integration tests for the buildstamp binary

use crate::fixtures::{read_json, write_manifest};
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_buildstamp");

#[test]
fn test_help_lists_options() {
    let output = Command::new(BIN).arg("--help").output().expect("run buildstamp");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Build Stamp CLI"));
    assert!(stdout.contains("--out-dir"));
    assert!(stdout.contains("--fields"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(BIN).arg("--version").output().expect("run buildstamp");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("buildstamp "));
    assert!(stdout.contains("Commit:"));
}

#[test]
fn test_writes_file_with_selected_fields() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(temp_dir.path(), "2.3.4").unwrap();
    let dist = temp_dir.path().join("dist");

    let output = Command::new(BIN)
        .args(["--out-dir", dist.to_str().unwrap()])
        .args(["--subdir", "meta"])
        .args(["--manifest", manifest.to_str().unwrap()])
        .args(["--fields", "version,builtAt"])
        .output()
        .expect("run buildstamp");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Version file written"));

    let json = read_json(&dist.join("meta/version.json"));
    assert_eq!(json["version"], "2.3.4");
    assert!(json.contains_key("builtAt"));
    assert!(!json.contains_key("revision"));
}

#[test]
fn test_missing_manifest_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("package.json");

    let output = Command::new(BIN)
        .args(["--out-dir", temp_dir.path().to_str().unwrap()])
        .args(["--manifest", manifest.to_str().unwrap()])
        .args(["--fields", "version"])
        .output()
        .expect("run buildstamp");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("package.json not found"));
    assert!(!temp_dir.path().join("version.json").exists());
}

#[test]
fn test_defaults_read_cwd_manifest_and_fall_back_without_git() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "7.1.0").unwrap();
    let ceiling = temp_dir.path().parent().unwrap();

    let output = Command::new(BIN)
        .current_dir(temp_dir.path())
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .args(["--fields", "version,revision", "--compact"])
        .output()
        .expect("run buildstamp");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = std::fs::read_to_string(temp_dir.path().join("dist/version.json")).unwrap();
    assert_eq!(text, r#"{"version":"7.1.0","revision":"unknown"}"#);
}

#[test]
fn test_bad_arguments_exit_with_usage_error() {
    let output = Command::new(BIN)
        .args(["--fields", "version,commit"])
        .output()
        .expect("run buildstamp");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown field 'commit'"));
}
