use std::fs;
use std::path::Path;

use argon2::Params;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use expense_ledger::config::LedgerPaths;
use expense_ledger::storage::{CredentialStore, FileCredentialStore};

fn ledger_cmd(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_DATA_DIR", base)
        .env_remove("LEDGER_USER")
        .env_remove("LEDGER_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Data directory with `alice`/`secret` registered using cheap hash parameters
fn seeded_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
    paths.ensure_directories().unwrap();
    let params = Params::new(256, 1, 1, None).unwrap();
    FileCredentialStore::with_params(paths.users_file(), params)
        .register("alice", "secret")
        .unwrap();
    temp_dir
}

fn as_alice(base: &Path) -> Command {
    let mut cmd = ledger_cmd(base);
    cmd.args(["--user", "alice", "--password", "secret"]);
    cmd
}

fn expenses_file(base: &Path) -> std::path::PathBuf {
    base.join("data").join("alice_expenses.txt")
}

#[test]
fn register_then_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    ledger_cmd(temp_dir.path())
        .args(["register", "bob", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered user: bob"));

    ledger_cmd(temp_dir.path())
        .args(["register", "bob", "--password", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User already exists: bob"));

    ledger_cmd(temp_dir.path())
        .env("LEDGER_USER", "bob")
        .env("LEDGER_PASSWORD", "pw")
        .args(["add", "2024-01-01", "food", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added: #1"));

    ledger_cmd(temp_dir.path())
        .env("LEDGER_USER", "bob")
        .env("LEDGER_PASSWORD", "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("$10.00"));

    let users = fs::read_to_string(temp_dir.path().join("users.txt")).unwrap();
    assert!(!users.contains(",pw"));
}

#[test]
fn add_persists_in_flat_format() {
    let temp_dir = seeded_dir();

    as_alice(temp_dir.path())
        .args(["add", "2024-01-01", "food", "10.00"])
        .assert()
        .success();
    as_alice(temp_dir.path())
        .args(["add", "2024-01-02", " food ", "5.5"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(expenses_file(temp_dir.path())).unwrap(),
        "2024-01-01,food,10.00\n2024-01-02,food,5.50\n"
    );

    as_alice(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("$15.50"));
}

#[test]
fn invalid_input_is_rejected() {
    let temp_dir = seeded_dir();

    as_alice(temp_dir.path())
        .args(["add", "2023-02-30", "food", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    as_alice(temp_dir.path())
        .args(["add", "2023-02-28", "food,drink", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("commas"));

    as_alice(temp_dir.path())
        .args(["add", "2023-02-28", "food", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));

    assert!(!expenses_file(temp_dir.path()).exists());
}

#[test]
fn edit_and_delete_by_number() {
    let temp_dir = seeded_dir();
    fs::write(
        expenses_file(temp_dir.path()),
        "2024-01-01,a,1.00\n2024-01-02,b,2.00\n2024-01-03,c,3.00\n",
    )
    .unwrap();

    as_alice(temp_dir.path())
        .args(["edit", "2", "2024-02-02", "z", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense #2"));

    as_alice(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(expenses_file(temp_dir.path())).unwrap(),
        "2024-02-02,z,9.00\n2024-01-03,c,3.00\n"
    );

    as_alice(temp_dir.path())
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: #5"));
}

#[test]
fn malformed_lines_are_skipped() {
    let temp_dir = seeded_dir();
    fs::write(
        expenses_file(temp_dir.path()),
        "2024-01-01,food,10.00\n2024-01-02,food\n2024-01-03,food,abc\n",
    )
    .unwrap();

    as_alice(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-01-02").not())
        .stdout(predicate::str::contains("2024-01-03").not());
}

#[test]
fn authentication_is_required() {
    let temp_dir = seeded_dir();

    ledger_cmd(temp_dir.path())
        .args(["--user", "alice", "--password", "wrong", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));

    ledger_cmd(temp_dir.path())
        .args(["--password", "secret", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user given"));
}

#[test]
fn init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    ledger_cmd(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(temp_dir.path().join("config.json").exists());

    ledger_cmd(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "not json").unwrap();

    ledger_cmd(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("using defaults"));

    ledger_cmd(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    let written = fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    assert!(written.contains("currency_symbol"));
}

#[test]
fn confirmations_use_configured_currency_symbol() {
    let temp_dir = seeded_dir();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();
    fs::write(
        expenses_file(temp_dir.path()),
        "2024-01-01,a,1.00\n2024-01-02,b,2.00\n",
    )
    .unwrap();

    as_alice(temp_dir.path())
        .args(["edit", "1", "2024-01-05", "z", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Was: 2024-01-01 a €1.00"));

    as_alice(temp_dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-02 b €2.00"))
        .stdout(predicate::str::contains("$").not());
}
