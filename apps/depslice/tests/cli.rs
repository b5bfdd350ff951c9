use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};
use tempfile::TempDir;

fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

fn depslice(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_depslice"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run depslice")
}

#[test]
fn test_single_argument_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().to_string();

    let output = depslice(&[root.as_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    let output = depslice(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_plain_project_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    let app = create_test_file(&root, "app.js", "const a = require('./routes/a.js');");
    let a = create_test_file(&root, "routes/a.js", "const u = require('../utils');");
    let utils = create_test_file(&root, "utils.js", "module.exports = {};");
    let ignored = create_test_file(&root, "node_modules/ignored.js", "IGNORED");
    create_test_file(&root, "banner.png", "");

    let root_arg = root.to_string_lossy().to_string();
    let output = depslice(&[root_arg.as_str(), "app.js"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("respond about the 'app.js' file."));
    assert!(stdout.contains("Directory Structure:"));
    for file in [&app, &a, &utils] {
        assert!(stdout.contains(&format!("\nFile: {}\n", file.display())));
    }
    assert!(!stdout.contains(&ignored.display().to_string()));
    assert!(!stdout.contains("node_modules"));
    assert!(!stdout.contains("IGNORED"));
    assert!(!stdout.contains("banner.png"));
}

#[test]
fn test_malformed_manifest_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "package.json", "{ broken");
    create_test_file(root, "app.js", "");

    let root_arg = root.to_string_lossy().to_string();
    let output = depslice(&[root_arg.as_str(), "app.js"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("package.json"));
}

#[test]
fn test_missing_entry_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "app.js", "");

    let root_arg = root.to_string_lossy().to_string();
    let output = depslice(&[root_arg.as_str(), "nope.js"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
