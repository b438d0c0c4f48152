use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINTRACK_DATA_DIR", data_dir);
    cmd.env_remove("FINTRACK_LOG");
    cmd
}

fn store_json(data_dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.join("data").join("store.json")).expect("store exists");
    serde_json::from_str(&raw).expect("valid json")
}

fn first_transaction_id(data_dir: &Path) -> String {
    store_json(data_dir)["transactions"][0]["id"]
        .as_str()
        .expect("transaction id")
        .to_string()
}

#[test]
fn cli_without_command_prints_overview() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .assert()
        .success()
        .stdout(contains("fintrack --help").and(contains("fintrack init")));
}

#[test]
fn cli_init_and_balance() {
    let dir = TempDir::new().unwrap();

    fintrack(dir.path())
        .args(["init", "1000"])
        .assert()
        .success()
        .stdout(contains("$1,000.00"));

    fintrack(dir.path())
        .args(["init", "50"])
        .assert()
        .failure()
        .stderr(contains("already initialized"));

    fintrack(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: $1,000.00"));

    let store = store_json(dir.path());
    assert_eq!(store["balance"]["total"], 1000);
    assert_eq!(store["balance"]["isInitialized"], true);
}

#[test]
fn cli_add_and_delete_scenario() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "1000"]).assert().success();

    fintrack(dir.path())
        .args(["txn", "add", "Dinner", "50", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("Balance:  $950.00"));

    fintrack(dir.path())
        .args(["txn", "add", "Paycheck", "200", "--category", "Salary", "--type", "income"])
        .assert()
        .success()
        .stdout(contains("$1,150.00"));

    let expense_id = first_transaction_id(dir.path());
    fintrack(dir.path())
        .args(["txn", "delete", &expense_id, "--force"])
        .assert()
        .success()
        .stdout(contains("$1,200.00"));

    let store = store_json(dir.path());
    assert_eq!(store["balance"]["total"], 1200);
    let food = store["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == "2")
        .unwrap();
    assert_eq!(food["amount"], 0);
    assert_eq!(food["count"], 0);
}

#[test]
fn cli_rejects_mismatched_category_and_negative_amount() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "100"]).assert().success();

    fintrack(dir.path())
        .args(["txn", "add", "Oops", "10", "--category", "Salary"])
        .assert()
        .failure()
        .stderr(contains("income category"));

    fintrack(dir.path())
        .args(["txn", "add", "Oops", "--category", "Food", "--", "-10"])
        .assert()
        .failure();

    assert_eq!(store_json(dir.path())["transactions"], serde_json::json!([]));
}

#[test]
fn cli_list_and_reports() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "500"]).assert().success();
    fintrack(dir.path())
        .args(["txn", "add", "Groceries", "42.10", "-c", "food"])
        .assert()
        .success();

    fintrack(dir.path())
        .args(["txn", "list", "--period", "today"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("-$42.10")));

    fintrack(dir.path())
        .args(["report", "breakdown", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("100%")));

    fintrack(dir.path())
        .args(["report", "summary", "--period", "week"])
        .assert()
        .success()
        .stdout(contains("Expenses"));

    fintrack(dir.path())
        .args(["report", "trend", "--monthly"])
        .assert()
        .success()
        .stdout(contains("Monthly Trend"));
}

#[test]
fn cli_hidden_balance_masks_amounts() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "750"]).assert().success();
    fintrack(dir.path()).args(["prefs", "toggle-balance"]).assert().success();

    fintrack(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("********").and(contains("750").not()));

    assert_eq!(store_json(dir.path())["showBalance"], false);
}

#[test]
fn cli_export_clear_import() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");
    fintrack(dir.path()).args(["init", "300"]).assert().success();
    fintrack(dir.path())
        .args(["txn", "add", "Bus", "2.50", "-c", "Transport"])
        .assert()
        .success();

    fintrack(dir.path())
        .args(["data", "export"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(contains("Transactions: 1"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&backup).unwrap()).unwrap();
    assert_eq!(exported["version"], "1.0");

    fintrack(dir.path()).args(["data", "clear", "--yes"]).assert().success();
    assert_eq!(store_json(dir.path())["transactions"], serde_json::json!([]));

    fintrack(dir.path())
        .args(["data", "import", "--yes"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(contains("Imported 1 transactions"));

    let store = store_json(dir.path());
    assert_eq!(store["transactions"][0]["title"], "Bus");
    assert_eq!(store["balance"]["total"], 297.5);
}

#[test]
fn cli_import_rejects_incomplete_backup() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"transactions": [], "balance": {"total": 5}}"#).unwrap();

    fintrack(dir.path())
        .args(["data", "import", "--yes"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("categories"));
}

#[test]
fn cli_rejects_amount_beyond_range_without_panicking() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "100"]).assert().success();

    fintrack(dir.path())
        .args(["txn", "add", "Big", "99999999999999999", "-c", "Food"])
        .assert()
        .failure()
        .stderr(contains("too large"))
        .stderr(contains("panicked").not());

    fintrack(dir.path())
        .args(["balance", "set", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(contains("panicked").not());

    let store = store_json(dir.path());
    assert_eq!(store["transactions"], serde_json::json!([]));
    assert_eq!(store["balance"]["total"], 100);
}

#[test]
fn cli_import_with_unrepresentable_amount_keeps_store() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path()).args(["init", "100"]).assert().success();
    let before = store_json(dir.path());

    let bad = dir.path().join("huge.json");
    fs::write(
        &bad,
        r#"{"transactions": [{"id": "1", "title": "Huge", "amount": 1e30, "type": "income",
             "date": "2024-06-01T00:00:00.000Z", "categoryId": "6"}],
            "categories": [], "balance": {"total": 0}}"#,
    )
    .unwrap();

    fintrack(dir.path())
        .args(["data", "import", "--yes"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("panicked").not());

    assert_eq!(store_json(dir.path()), before);
}

#[test]
fn cli_migrates_legacy_files() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("balance.json"), r#"{"total": 88, "isInitialized": false}"#).unwrap();

    fintrack(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("$88.00").and(contains("No starting balance").not()));

    assert_eq!(store_json(dir.path())["balance"]["isInitialized"], true);
}

#[test]
fn cli_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("store.json").and(contains("Page size:     15")));
}
