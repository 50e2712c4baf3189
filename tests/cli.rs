use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn thuchi(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thuchi").unwrap();
    cmd.env("THUCHI_DATA_DIR", dir.path()).env_remove("THUCHI_LOG");
    cmd
}

#[test]
fn test_add_parses_quick_entry_line() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .args(["add", "Cơm trưa. 35k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("35.000 ₫"))
        .stdout(predicate::str::contains("Food & Drink"))
        .stdout(predicate::str::contains("Cơm trưa"));

    thuchi(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));
}

#[test]
fn test_add_without_amount_fails() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .args(["add", "just", "a", "note"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No amount found"));

    thuchi(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_bulk_from_stdin_skips_lines_without_amount() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .arg("bulk")
        .write_stdin("Phở. 50k\n\nGửi xe. 5k\nchưa có số tiền\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created 2 transaction(s), skipped 1 line(s) without an amount",
        ));

    thuchi(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: All time"))
        .stdout(predicate::str::contains("55.000 ₫"))
        .stdout(predicate::str::contains("Food & Drink"))
        .stdout(predicate::str::contains("2 transaction(s)"));
}

#[test]
fn test_income_balance() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .args(["add", "--income", "Lương tháng. 15000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
    thuchi(&dir).args(["add", "Bún bò. 45k"]).assert().success();

    thuchi(&dir)
        .args(["summary", "--period", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: This month"))
        .stdout(predicate::str::contains("14.955.000 ₫"));
}

#[test]
fn test_food_budget_against_daily_limit() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .arg("food")
        .assert()
        .success()
        .stdout(predicate::str::contains("no daily limit set"));

    thuchi(&dir)
        .args(["limit", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily food limit set to 100.000 ₫"));
    thuchi(&dir).args(["add", "Cơm tấm. 80k"]).assert().success();

    thuchi(&dir)
        .arg("food")
        .assert()
        .success()
        .stdout(predicate::str::contains("80.000 ₫ of 100.000 ₫"))
        .stdout(predicate::str::contains("almost at limit"))
        .stdout(predicate::str::contains("Remaining: 20.000 ₫"))
        .stdout(predicate::str::contains("1 transaction(s) recorded today"));

    thuchi(&dir)
        .args(["food", "--total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days tracked:    1"))
        .stdout(predicate::str::contains("Total saved:     20.000 ₫"));
}

#[test]
fn test_invalid_limit_keeps_previous_value() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir).args(["limit", "50000"]).assert().success();
    thuchi(&dir)
        .args(["limit", "--", "-5"])
        .assert()
        .failure();
    thuchi(&dir).args(["limit", "abc"]).assert().failure();

    thuchi(&dir)
        .arg("limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily food limit: 50.000 ₫"));
}

#[test]
fn test_shortcuts() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .args(["shortcut", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cafe sáng"))
        .stdout(predicate::str::contains("Nhận lương"));

    thuchi(&dir)
        .args(["shortcut", "use", "cafe sáng"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Cafe sáng: 35.000 ₫"));

    thuchi(&dir)
        .args(["shortcut", "add", "Giặt đồ", "40000", "--category", "laundry"])
        .assert()
        .success();
    thuchi(&dir)
        .args(["shortcut", "add", "Oops", "40000", "--category", "salary"])
        .assert()
        .failure();

    thuchi(&dir)
        .args(["shortcut", "delete", "Gửi xe"])
        .assert()
        .success();
    thuchi(&dir)
        .args(["shortcut", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Giặt đồ"))
        .stdout(predicate::str::contains("Gửi xe").not());
}

#[test]
fn test_clear_requires_force() {
    let dir = TempDir::new().unwrap();
    thuchi(&dir).args(["add", "Trà sữa. 30k"]).assert().success();

    thuchi(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));
    thuchi(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Showing 1 of 1"));

    thuchi(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transaction(s)"));
    thuchi(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_currency_changes_formatting() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .args(["currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency set to USD"));
    thuchi(&dir)
        .args(["add", "Coffee. 5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5.00"));

    thuchi(&dir).args(["currency", "EUR"]).assert().failure();
}

#[test]
fn test_history_records_changes() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes recorded yet."));

    thuchi(&dir).args(["add", "Phở. 50k"]).assert().success();
    thuchi(&dir).args(["limit", "70000"]).assert().success();

    thuchi(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"))
        .stdout(predicate::str::contains("UPDATE Preference dailyFoodLimit"));
}

#[test]
fn test_categories_and_storage() {
    let dir = TempDir::new().unwrap();

    thuchi(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("laundry"))
        .stdout(predicate::str::contains("investment"));

    thuchi(&dir).args(["add", "Phở. 50k"]).assert().success();
    thuchi(&dir)
        .arg("storage")
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions"));
}

#[test]
fn test_edit_and_delete_by_id_prefix() {
    let dir = TempDir::new().unwrap();
    thuchi(&dir)
        .args(["add", "--date", "2025-04-10", "Phở. 50k"])
        .assert()
        .success();

    let output = thuchi(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find(|l| l.contains("2025-04-10"))
        .and_then(|l| l.split_whitespace().next())
        .unwrap()
        .to_string();

    thuchi(&dir)
        .args(["edit", &id, "--amount", "60000", "--note", "Phở bò"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60.000 ₫"))
        .stdout(predicate::str::contains("Phở bò"));

    thuchi(&dir)
        .args(["edit", &id, "--category", "salary"])
        .assert()
        .failure();

    thuchi(&dir).args(["delete", &id]).assert().success();
    thuchi(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No transactions found."));
}
