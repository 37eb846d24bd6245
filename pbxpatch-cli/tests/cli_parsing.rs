//! End-to-end CLI tests over a synthetic descriptor.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../../tests/fixtures/minimal.pbxproj");

fn pbxpatch() -> Command {
    Command::cargo_bin("pbxpatch").expect("pbxpatch binary")
}

fn write_project(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("project.pbxproj");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn patches_and_prints_the_success_line() {
    let temp = TempDir::new().unwrap();
    let path = write_project(temp.path(), FIXTURE);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .arg("--no-backup")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully added EhDownloadWidget extension target to project.pbxproj",
        ));

    let patched = fs::read_to_string(&path).unwrap();
    assert!(patched.contains("DC9A30012F40A10100AABB01 /* EhDownloadWidget */"));
    assert!(patched.len() > FIXTURE.len());
}

#[test]
fn default_path_is_the_host_project_descriptor() {
    let temp = TempDir::new().unwrap();
    let project_dir = temp.path().join("ehviewer apple.xcodeproj");
    fs::create_dir_all(&project_dir).unwrap();
    let path = write_project(&project_dir, FIXTURE);

    pbxpatch()
        .current_dir(temp.path())
        .arg("--no-backup")
        .assert()
        .success();

    let patched = fs::read_to_string(&path).unwrap();
    assert!(patched.contains("com.apple.product-type.app-extension"));
}

#[test]
fn missing_anchor_exits_2_and_leaves_the_file_alone() {
    let temp = TempDir::new().unwrap();
    let broken = FIXTURE.replace("/* End XCConfigurationList section */", "");
    let path = write_project(temp.path(), &broken);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("config-list"));

    assert_eq!(fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn skip_mode_applies_the_partial_patch() {
    let temp = TempDir::new().unwrap();
    let broken = FIXTURE.replace("/* End XCConfigurationList section */", "");
    let path = write_project(temp.path(), &broken);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .arg("--on-missing-anchor")
        .arg("skip")
        .arg("--no-backup")
        .assert()
        .success();

    let patched = fs::read_to_string(&path).unwrap();
    assert!(patched.contains("DC9A30012F40A10100AABB01"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_project(temp.path(), FIXTURE);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry-run: 18 of 18 steps match"));

    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn backup_is_written_by_default() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), FIXTURE);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .assert()
        .success();

    let backup = fs::read_to_string(temp.path().join("project.pbxproj.pbxpatch.bak")).unwrap();
    assert_eq!(backup, FIXTURE);
}

#[test]
fn out_dir_receives_diff_and_report() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), FIXTURE);

    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .arg("--no-backup")
        .arg("--out-dir")
        .arg("artifacts")
        .assert()
        .success();

    let diff = fs::read_to_string(temp.path().join("artifacts").join("patch.diff")).unwrap();
    assert!(diff.contains("+++ b/project.pbxproj"));

    let report = fs::read_to_string(temp.path().join("artifacts").join("patch.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(v["schema"], "pbxpatch.report.v1");
    assert_eq!(v["applied"], true);
    assert_eq!(v["summary"]["matched"], 18);
}

#[test]
fn config_file_sets_skip_mode_and_cli_overrides_it() {
    let temp = TempDir::new().unwrap();
    let broken = FIXTURE.replace("/* End XCConfigurationList section */", "");
    write_project(temp.path(), &broken);
    fs::write(
        temp.path().join("pbxpatch.toml"),
        "[policy]\non_missing_anchor = \"skip\"\n\n[backups]\nenabled = false\n",
    )
    .unwrap();

    // Config file alone: skip mode, run succeeds.
    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .assert()
        .success();

    // Explicit CLI fail wins over the config file.
    write_project(temp.path(), &broken);
    pbxpatch()
        .current_dir(temp.path())
        .arg("project.pbxproj")
        .arg("--on-missing-anchor")
        .arg("fail")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn list_steps_needs_no_file() {
    let temp = TempDir::new().unwrap();

    let assert = pbxpatch()
        .current_dir(temp.path())
        .arg("--list-steps")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for step in [
        "build-file-embed",
        "embed-copy-phase-section",
        "products-group-child",
        "app-target-embed",
        "config-list",
    ] {
        assert!(stdout.contains(step), "missing step {step}");
    }
    assert!(stdout.contains("replace-block"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    pbxpatch()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
