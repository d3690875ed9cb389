//! Integration tests for the `treeguard` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn treeguard() -> Command {
    let mut cmd = Command::cargo_bin("treeguard").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn complete_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("README.md"), "# demo").unwrap();
    fs::write(root.join(".gitignore"), "target/").unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/.keep"), "").unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("r_folder")).unwrap();
    fs::write(root.join("r_folder/README.md"), "").unwrap();
    fs::write(root.join("r_folder/main.R"), "").unwrap();
    fs::write(root.join("tests.py"), "").unwrap();
    dir
}

fn write_config(root: &Path, body: &str) {
    fs::write(root.join("treeguard.toml"), body).unwrap();
}

#[test]
fn passes_on_complete_tree_from_working_directory() {
    let dir = complete_tree();
    treeguard()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Verifying repository structure"))
        .stderr(predicate::str::contains("INFO: optional ./LICENSE"))
        .stderr(predicate::str::contains("STRUCTURE VIOLATION").not());
}

#[test]
fn fails_with_one_line_per_violation() {
    let dir = complete_tree();
    fs::remove_file(dir.path().join("README.md")).unwrap();
    fs::rename(dir.path().join("r_folder"), dir.path().join("r_folder_x")).unwrap();

    treeguard()
        .arg("--repo-root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "STRUCTURE VIOLATION: required file not found: ./README.md",
        ))
        .stderr(predicate::str::contains(
            "the single existing folder must be named exactly './r_folder'",
        ));
}

#[test]
fn configuration_errors_are_marked_and_fail() {
    let dir = complete_tree();
    write_config(
        dir.path(),
        r#"
[[rules.required]]
target = "./README.md"
kind = "file"

[[rules.required]]
target = "./src"
kind = "folder"
"#,
    );
    treeguard()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "CONFIGURATION ERROR (script/config error): unknown check kind 'folder'",
        ))
        .stderr(predicate::str::contains("rules: treeguard.toml"));
}

#[test]
fn unparsable_config_file_exits_one() {
    let dir = complete_tree();
    write_config(dir.path(), "rules = [");
    let out = treeguard()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIGURATION ERROR"))
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(out).unwrap();
    let first = stderr.lines().next().unwrap_or_default();
    assert!(first.starts_with("Verifying repository structure in ."), "{}", stderr);
    assert!(first.contains("treeguard.toml"), "{}", stderr);
}

#[test]
fn json_output_reports_outcome_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
[[rules.required]]
target = "./r_folder"
kind = "pattern_folder"

[rules.pattern_files]
"./r_folder" = ["main.R"]
"#,
    );
    let out = treeguard()
        .current_dir(dir.path())
        .args(["--output", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["passed"], false);
    assert_eq!(v["violations"].as_array().unwrap().len(), 1);
    assert!(v["violations"][0]["message"]
        .as_str()
        .unwrap()
        .contains("no directories found"));
}

#[test]
fn skip_optional_suppresses_info_lines() {
    let dir = complete_tree();
    treeguard()
        .current_dir(dir.path())
        .arg("--skip-optional")
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO").not());
}

#[test]
fn rules_subcommand_prints_loadable_toml() {
    let dir = tempfile::tempdir().unwrap();
    let out = treeguard()
        .current_dir(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[rules.required]]"))
        .get_output()
        .stdout
        .clone();

    // Feeding the dump back in must reproduce the built-in behavior.
    let text = String::from_utf8(out).unwrap();
    let tree = complete_tree();
    write_config(tree.path(), &text);
    treeguard()
        .current_dir(tree.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("rules: treeguard.toml"));
}
