//! Integration tests for the scan-quick command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn code_organizer() -> Command {
    Command::cargo_bin("code-organizer").unwrap()
}

/// Create a workspace with several project types and some clutter.
fn create_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let py = root.join("projects/analytics");
    fs::create_dir_all(py.join("src")).unwrap();
    fs::write(py.join("requirements.txt"), "requests\n").unwrap();
    fs::write(py.join("src/main.py"), "print('hi')").unwrap();

    let py_copy = root.join("old/analytics-backup");
    fs::create_dir_all(&py_copy).unwrap();
    fs::write(py_copy.join("setup.py"), "").unwrap();

    let web = root.join("projects/web-app");
    fs::create_dir_all(&web).unwrap();
    fs::write(web.join("package.json"), r#"{"name": "web-app"}"#).unwrap();

    let keys = root.join("stuff/keys");
    fs::create_dir_all(&keys).unwrap();
    fs::write(keys.join("id_rsa"), "-----BEGIN-----").unwrap();

    fs::create_dir_all(root.join("hollow/inner")).unwrap();

    tmp
}

/// Config without excludes so temp paths are never filtered.
fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, "[scan]\nexclude_paths = [\"/never-matches-anything\"]\n").unwrap();
    path
}

#[test]
fn test_scan_quick_text_report() {
    let tmp = create_test_workspace();
    let cfg_dir = TempDir::new().unwrap();

    code_organizer()
        .arg("--config")
        .arg(write_config(cfg_dir.path()))
        .arg("scan-quick")
        .arg("-p")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Projects Found: 3"))
        .stdout(predicate::str::contains("Potential Duplicates: 1 pairs"))
        .stdout(predicate::str::contains("id_rsa"))
        .stdout(predicate::str::contains("Quick scan complete"));
}

#[test]
fn test_scan_quick_json_output() {
    let tmp = create_test_workspace();
    let cfg_dir = TempDir::new().unwrap();

    let output = code_organizer()
        .arg("--config")
        .arg(write_config(cfg_dir.path()))
        .arg("scan-quick")
        .arg("--json")
        .arg("-p")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["total_projects"], 3);
    assert_eq!(json["projects_by_type"]["Python"], 2);
    assert_eq!(json["projects_by_type"]["Node.js"], 1);
    assert_eq!(json["duplicates"].as_array().unwrap().len(), 1);
    assert_eq!(json["security_findings"].as_array().unwrap().len(), 1);
    assert!(json["empty_folders"].is_array());
}

#[test]
fn test_scan_quick_reports_quick_win() {
    let tmp = TempDir::new().unwrap();
    let cfg_dir = TempDir::new().unwrap();
    let modules = tmp.path().join("loose/node_modules");
    fs::create_dir_all(&modules).unwrap();
    fs::write(modules.join("bundle.js"), vec![0u8; 2 * 1024 * 1024]).unwrap();

    code_organizer()
        .arg("--config")
        .arg(write_config(cfg_dir.path()))
        .arg("scan-quick")
        .arg("-p")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Build Artifacts"))
        .stdout(predicate::str::contains("TOTAL POTENTIAL SAVINGS"));
}

#[test]
fn test_scan_quick_exclude_flag() {
    let tmp = create_test_workspace();
    let cfg_dir = TempDir::new().unwrap();

    let output = code_organizer()
        .arg("--config")
        .arg(write_config(cfg_dir.path()))
        .arg("scan-quick")
        .arg("--json")
        .arg("-e")
        .arg("/projects")
        .arg("-p")
        .arg(tmp.path())
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_projects"], 1);
}

#[test]
fn test_scan_quick_missing_root_warns_and_continues() {
    let tmp = create_test_workspace();
    let cfg_dir = TempDir::new().unwrap();

    code_organizer()
        .arg("--config")
        .arg(write_config(cfg_dir.path()))
        .arg("scan-quick")
        .arg("-p")
        .arg("/nonexistent/path/12345")
        .arg("-p")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Projects Found: 3"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_scan_quick_writes_log_file() {
    let tmp = TempDir::new().unwrap();
    let cfg_dir = TempDir::new().unwrap();
    let log_dir = cfg_dir.path().join("logs");
    let config = cfg_dir.path().join("config.toml");
    fs::write(
        &config,
        format!("[logging]\nlog_dir = \"{}\"\n", log_dir.display()),
    )
    .unwrap();

    code_organizer()
        .arg("--config")
        .arg(&config)
        .arg("scan-quick")
        .arg("-p")
        .arg(tmp.path())
        .assert()
        .success();

    let logs: Vec<_> = fs::read_dir(&log_dir).unwrap().flatten().collect();
    assert_eq!(logs.len(), 1);
    let name = logs[0].file_name().to_string_lossy().into_owned();
    assert!(name.starts_with("code_organizer_"));
    assert!(name.ends_with(".log"));
}
