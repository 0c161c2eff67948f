use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "12.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Index: 0"));

    expenses(&dir)
        .args(["add", "2024-01-02", "Transport", "-3"])
        .assert()
        .success();

    assert!(dir.path().join("expenses.json").exists());

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Total: $9.50"));
}

#[test]
fn delete_shifts_entries() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "12.5"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "2024-01-02", "Transport", "3"])
        .assert()
        .success();
    expenses(&dir).args(["delete", "0"]).assert().success();

    let contents = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([{"date": "2024-01-02", "category": "Transport", "amount": 3.0}])
    );
}

#[test]
fn edit_saves_new_values() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "12.5"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "2024-01-02", "Transport", "3"])
        .assert()
        .success();

    expenses(&dir)
        .args(["edit", "1", "2024-01-03", "Taxi", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Index: 1"));

    let contents = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([
            {"date": "2024-01-01", "category": "Food", "amount": 12.5},
            {"date": "2024-01-03", "category": "Taxi", "amount": 9.0}
        ])
    );
}

#[test]
fn invalid_index_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "12.5"])
        .assert()
        .success();

    expenses(&dir)
        .args(["edit", "5", "2024-01-01", "Food", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index: 5"));

    expenses(&dir)
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index"));
}

#[test]
fn malformed_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn corrupt_data_file_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("expenses.json");
    std::fs::write(&data_file, "[{ broken").unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "12.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading expenses"));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[{ broken");
}

#[test]
fn interactive_menu_saves_on_request() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .write_stdin("1\n2024-01-01\nFood\n12.5\n4\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("===== Expense Tracker Menu ====="))
        .stdout(predicate::str::contains("Expense added successfully."))
        .stdout(predicate::str::contains("Expenses saved to"))
        .stdout(predicate::str::contains("Exiting program."));

    expenses(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $12.50"));
}

#[test]
fn interactive_menu_does_not_save_on_exit() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("menu")
        .write_stdin("1\n2024-01-01\nFood\n12.5\n6\n")
        .assert()
        .success();

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn file_flag_overrides_default() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["--file", "ledger.json", "add", "2024-01-01", "Food", "1"])
        .assert()
        .success();

    assert!(dir.path().join("ledger.json").exists());
    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2024-01-01", "Food", "10"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "2024-01-02", "food", "20.5"])
        .assert()
        .success();

    let output = expenses(&dir)
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(export["expense_count"], 2);
    assert_eq!(export["total"], 30.5);
}

#[test]
fn export_csv_with_short_flags() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["-f", "ledger.json", "add", "2024-01-01", "Food", "10"])
        .assert()
        .success();

    expenses(&dir)
        .args(["export", "-F", "csv", "-f", "ledger.json", "-o", "out.csv"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(csv, "Index,Date,Category,Amount\n0,2024-01-01,Food,10.0\n");
}

#[test]
fn total_by_category() {
    let dir = TempDir::new().unwrap();

    for (date, category, amount) in [
        ("2024-01-01", "Food", "10"),
        ("2024-01-02", "Rent", "900"),
        ("2024-01-03", "FOOD", "5"),
    ] {
        expenses(&dir)
            .args(["add", date, category, amount])
            .assert()
            .success();
    }

    expenses(&dir)
        .args(["total", "--by-category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15.00"))
        .stdout(predicate::str::contains("$900.00"))
        .stdout(predicate::str::contains("Total: $915.00"));

    expenses(&dir)
        .args(["list", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $15.00"))
        .stdout(predicate::str::contains("Rent").not());
}
