//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn chinook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chinook").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SQLITE_DB_URL")
        .env_remove("CHINOOK_BIND")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    let dir = TempDir::new().unwrap();
    chinook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("health"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    chinook(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--health-fail-fast"));
}

#[test]
fn test_health_help() {
    let dir = TempDir::new().unwrap();
    chinook(&dir)
        .arg("health")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

// === Health Command Tests ===

#[test]
fn test_health_reports_up() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("chinook.db").display());

    chinook(&dir)
        .arg("health")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "up""#))
        .stdout(predicate::str::contains("open_connections"));
}

#[test]
fn test_health_reads_url_from_env() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("env.db").display());

    chinook(&dir)
        .env("SQLITE_DB_URL", &url)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "up""#));
}

#[test]
fn test_health_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("absent.db").display());

    chinook(&dir)
        .arg("health")
        .arg("--database-url")
        .arg(&url)
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""status": "down""#))
        .stderr(predicate::str::contains("db down"));
}

#[test]
fn test_health_rejects_malformed_locator() {
    let dir = TempDir::new().unwrap();

    chinook(&dir)
        .arg("health")
        .arg("--database-url")
        .arg("sqlite://chinook.db?mode=sideways")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid SQLITE_DB_URL"));
}
