use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn schoolfees_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("schoolfees"))
}

#[test]
fn test_help() {
    schoolfees_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CLI dashboard for school fees and payments",
        ));
}

#[test]
fn test_version() {
    schoolfees_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schoolfees"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized schoolfees config"));

    assert!(config_path.join("config.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    // First init should succeed
    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    // Second init should fail
    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_status_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status_after_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schoolfees Status"))
        .stdout(predicate::str::contains("API base URL:"))
        .stdout(predicate::str::contains("not set"))
        .stdout(predicate::str::contains("Children cached:  0"));
}

#[test]
fn test_status_verbose_shows_paths() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("children.json"));
}

fn write_children(config_path: &std::path::Path, children: &str) {
    fs::write(config_path.join("children.json"), children).unwrap();
}

#[test]
fn test_children_from_cache() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_children(
        &config_path,
        r#"[
            {
                "id": "s1",
                "firstName": "Adaeze",
                "lastName": "Okafor",
                "class": { "className": "JSS 2" }
            },
            {
                "id": "s2",
                "firstName": "Emeka",
                "lastName": "Okafor"
            }
        ]"#,
    );

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "children"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adaeze Okafor"))
        .stdout(predicate::str::contains("JSS 2"))
        .stdout(predicate::str::contains("Emeka Okafor"));
}

#[test]
fn test_children_cold_cache_without_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    // Directory exists but was never initialized, so there is nothing to
    // fetch with and nothing cached.
    fs::create_dir_all(&config_path).unwrap();

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "children"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No children cached"));
}

#[test]
fn test_fees_invalid_status_filter() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    schoolfees_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "fees",
            "--status",
            "late",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --status value: 'late'"));
}

#[test]
fn test_payments_invalid_status_filter() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    schoolfees_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "payments",
            "--payment-status",
            "refunded",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --payment-status value"));
}

#[test]
fn test_fees_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "fees"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_fees_unreachable_backend() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("schoolfees-config");

    fs::create_dir_all(&config_path).unwrap();
    fs::write(
        config_path.join("config.toml"),
        r#"[api]
base_url = "http://127.0.0.1:9"
token = "test-token"
timeout_secs = 2
"#,
    )
    .unwrap();

    schoolfees_cmd()
        .args(["-C", config_path.to_str().unwrap(), "fees"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API request failed"));
}
