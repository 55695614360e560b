//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the PENNY_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn penny(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("penny").unwrap();
    cmd.env("PENNY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_ledger_with_header() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let ledger = std::fs::read_to_string(dir.path().join("finance_data.csv")).unwrap();
    assert_eq!(ledger, "date,amount,category,description\n");
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn add_then_list_round_trips() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "1000", "income", "--date", "01-12-2025", "-m", "salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully"));

    penny(&dir)
        .args(["txn", "add", "200", "expense", "--date", "05-12-2025", "-m", "groceries"])
        .assert()
        .success();

    penny(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01-12-2025"))
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("Total income: $1000.00"))
        .stdout(predicate::str::contains("Total expense: $200.00"))
        .stdout(predicate::str::contains("Net savings: $800.00"));
}

#[test]
fn list_filters_by_date_range() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "1000", "income", "--date", "01-12-2025", "-m", "salary"])
        .assert()
        .success();
    penny(&dir)
        .args(["txn", "add", "200", "expense", "--date", "05-12-2025", "-m", "groceries"])
        .assert()
        .success();

    // Range starting after the salary only shows groceries
    penny(&dir)
        .args(["txn", "list", "--from", "02-12-2025", "--to", "31-12-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"))
        .stdout(predicate::str::contains("salary").not());
}

#[test]
fn empty_range_prints_notice() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "50", "expense", "--date", "01-12-2025"])
        .assert()
        .success();

    penny(&dir)
        .args(["txn", "list", "--from", "01-01-2026", "--to", "31-01-2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No transactions found in the given date range.",
        ));
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "-50", "expense"])
        .assert()
        .failure();

    penny(&dir)
        .args(["txn", "add", "abc", "expense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    penny(&dir)
        .args(["txn", "add", "50", "savings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));

    penny(&dir)
        .args(["txn", "add", "50", "expense", "--date", "2025-12-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn report_summary_matches_totals() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "1000", "income", "--date", "01-12-2025", "-m", "salary"])
        .assert()
        .success();
    penny(&dir)
        .args(["txn", "add", "200", "expense", "--date", "05-12-2025", "-m", "groceries"])
        .assert()
        .success();

    penny(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income:"))
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("$800.00"));
}

#[test]
fn report_monthly_groups_by_month() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "1000", "income", "--date", "01-11-2025"])
        .assert()
        .success();
    penny(&dir)
        .args(["txn", "add", "300", "expense", "--date", "10-12-2025"])
        .assert()
        .success();

    penny(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-11"))
        .stdout(predicate::str::contains("2025-12"));
}

#[test]
fn report_breakdown_sorts_by_total() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["txn", "add", "1200", "expense", "--date", "01-12-2025", "-m", "rent"])
        .assert()
        .success();
    penny(&dir)
        .args(["txn", "add", "30", "expense", "--date", "02-12-2025", "-m", "coffee"])
        .assert()
        .success();

    let output = penny(&dir)
        .args(["report", "breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rent"))
        .stdout(predicate::str::contains("coffee"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let rent_pos = text.find("rent").unwrap();
    let coffee_pos = text.find("coffee").unwrap();
    assert!(rent_pos < coffee_pos, "largest total should come first");
}

#[test]
fn generate_refuses_to_replace_without_force() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["generate", "--months", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    penny(&dir)
        .args(["generate", "--months", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    penny(&dir)
        .args(["generate", "--months", "1", "--force"])
        .assert()
        .success();
}

#[test]
fn generated_ledger_loads_cleanly() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .args(["generate", "--months", "2"])
        .assert()
        .success();

    penny(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FINANCIAL SUMMARY"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    penny(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("finance_data.csv"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}
