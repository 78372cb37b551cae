//! End-to-end flows driven through script mode on a piped stdin.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn tool(bin: &str, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("binary built");
    cmd.env("CAMPUS_CORE_HOME", home.path())
        .env("CAMPUS_CORE_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn bank_create_deposit_withdraw_and_overdraw() {
    let home = TempDir::new().expect("temp home");

    // Create an account and exit.
    tool("campus_bank", &home)
        .write_stdin("1\nSam Carter\n30\n0123456789\n250\nn\n")
        .assert()
        .success()
        .stdout(contains("Account created successfully!"))
        .stdout(contains("Account Number: ACC001"))
        .stdout(contains("Initial Balance: $250.00"));

    // Deposit in a second run; the number lookup is case-insensitive.
    tool("campus_bank", &home)
        .write_stdin("2\nacc001\n50\nn\n")
        .assert()
        .success()
        .stdout(contains("Deposit successful!"))
        .stdout(contains("New Balance: $300.00"));

    // Overdraw is rejected and the balance survives.
    tool("campus_bank", &home)
        .write_stdin("3\nACC001\n1000\nn\n")
        .assert()
        .success()
        .stdout(contains("Current Balance: $300.00"))
        .stdout(contains("Insufficient funds"));

    // A covered withdrawal goes through and reports the remainder.
    tool("campus_bank", &home)
        .write_stdin("3\nACC001\n120\nn\n")
        .assert()
        .success()
        .stdout(contains("Withdrawal successful!"))
        .stdout(contains("Withdrawn Amount: $120.00"))
        .stdout(contains("Remaining Balance: $180.00"));

    let saved = std::fs::read_to_string(home.path().join("accounts.json"))
        .expect("accounts file exists");
    assert!(saved.contains("\"balance\": 180.0"));
    assert!(saved.contains("\"account_number\": \"ACC001\""));
    assert!(saved.contains("\"Withdrawal\""));
}

#[test]
fn bank_rejects_undersized_initial_deposit_then_accepts() {
    let home = TempDir::new().expect("temp home");

    tool("campus_bank", &home)
        .write_stdin("1\nPat\n22\n9876543210\n50\n150\nn\n")
        .assert()
        .success()
        .stdout(contains("Minimum initial deposit is $100."))
        .stdout(contains("Initial Balance: $150.00"));
}

#[test]
fn bank_unknown_account_reports_not_found() {
    let home = TempDir::new().expect("temp home");

    tool("campus_bank", &home)
        .write_stdin("4\nACC999\nn\n")
        .assert()
        .success()
        .stdout(contains("No accounts found! Please create an account first."));
}

#[test]
fn todo_add_complete_and_persisted_line_format() {
    let home = TempDir::new().expect("temp home");

    tool("campus_todo", &home)
        .write_stdin("1\nwrite lab report\ny\n3\n1\nn\n")
        .assert()
        .success()
        .stdout(contains("Task added successfully!"))
        .stdout(contains("Task marked as complete!"));

    let saved =
        std::fs::read_to_string(home.path().join("tasks.txt")).expect("tasks file exists");
    assert!(saved.starts_with("1|COMPLETED|"));
    assert!(saved.trim_end().ends_with("|write lab report"));
}

#[test]
fn todo_delete_requires_confirmation() {
    let home = TempDir::new().expect("temp home");

    tool("campus_todo", &home)
        .write_stdin("1\nbuy supplies\ny\n4\n1\nno\nn\n")
        .assert()
        .success()
        .stdout(contains("Task deletion cancelled!"))
        .stdout(contains("(y/n)").not());

    let saved =
        std::fs::read_to_string(home.path().join("tasks.txt")).expect("tasks file exists");
    assert!(saved.contains("buy supplies"));
}

#[test]
fn calc_divides_and_reports_zero_division() {
    let home = TempDir::new().expect("temp home");

    tool("campus_calc", &home)
        .write_stdin("4\n10\n4\ny\n4\n1\n0\nn\n")
        .assert()
        .success()
        .stdout(contains("Result: 10 ÷ 4 = 2.5"))
        .stdout(contains("Division by zero is not allowed"));
}

#[test]
fn grades_reports_grade_for_entered_marks() {
    let home = TempDir::new().expect("temp home");

    tool("campus_grades", &home)
        .write_stdin("1\nJamie\n90\n85\n95\n80\n100\nn\n")
        .assert()
        .success()
        .stdout(contains("Total Marks: 450.0 / 500"))
        .stdout(contains("Average: 90.00%"))
        .stdout(contains("Grade: A (Excellent)"));
}
