use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn droidspec_cmd() -> Command {
    Command::cargo_bin("droidspec").unwrap()
}

const INSECURE_DESCRIPTOR: &str = r#"
[application]
namespace = "com.example.app"
version-code = 3

[sdk]
compile = 36

[compile-options]
source-compatibility = "11"
target-compatibility = "11"

[variant.release]
signing = "debug"
"#;

const SPLIT_DESCRIPTOR: &str = r#"
[application]
namespace = "com.example.app"

[sdk]
compile = 36

[compile-options]
source-compatibility = "11"
target-compatibility = "11"

[signing.release]
keystore = "release.keystore"

[variant.release]
signing = "release"

[splits.abi]
enable = true
include = ["arm64-v8a", "x86_64"]
universal = true
"#;

#[test]
fn test_artifacts_insecure_release_requires_acknowledgment() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), INSECURE_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--allow-insecure-signing"));
}

#[test]
fn test_artifacts_acknowledgment_unblocks_the_plan() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), INSECURE_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "release", "--allow-insecure-signing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app-release.apk"))
        .stdout(predicate::str::contains("versionCode 3"));
}

#[test]
fn test_artifacts_debug_variant_needs_no_acknowledgment() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), INSECURE_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app-debug.apk"));
}

#[test]
fn test_artifacts_splits_enabled_lists_each_abi() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), SPLIT_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app-arm64-v8a-release.apk"))
        .stdout(predicate::str::contains("app-x86_64-release.apk"))
        .stdout(predicate::str::contains("app-universal-release.apk"));
}

#[test]
fn test_artifacts_json_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), SPLIT_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "release", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"file_name\""))
        .stdout(predicate::str::contains("\"abi\""));
}

#[test]
fn test_artifacts_unknown_variant_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Android.toml"), SPLIT_DESCRIPTOR).unwrap();

    droidspec_cmd()
        .current_dir(tmp.path())
        .args(["artifacts", "--variant", "nightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown variant 'nightly'"));
}
