use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_employee, init_with_ledger, ledger_path, rpay, setup_data_dir, temp_out};

#[test]
fn test_history_lists_all_records() {
    let data = setup_data_dir("history_lists_all_records");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "history"])
        .assert()
        .success()
        .stdout(contains("Payroll history"))
        .stdout(contains("2025-03-14"))
        .stdout(contains("2025-04-11"))
        .stdout(contains("Jane Doe (#1)"))
        .stdout(contains("$877.33"))
        .stdout(contains("$554.10"))
        .stdout(contains("2 record(s)"));
}

#[test]
fn test_history_filters_by_range_and_employee() {
    let data = setup_data_dir("history_filters_by_range_and_employee");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "history", "--range", "2025-04"])
        .assert()
        .success()
        .stdout(contains("2025-04-11"))
        .stdout(contains("2025-03-14").not())
        .stdout(contains("1 record(s)"));

    rpay()
        .args(["--data", &data, "history", "--employee", "2"])
        .assert()
        .success()
        .stdout(contains("No payroll records found"));
}

#[test]
fn test_history_rejects_bad_range() {
    let data = setup_data_dir("history_rejects_bad_range");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "history", "--range", "2025-04:2025-01"])
        .assert()
        .failure();
}

#[test]
fn test_history_survives_corrupt_ledger() {
    let data = setup_data_dir("history_survives_corrupt_ledger");
    init_with_employee(&data);
    fs::write(ledger_path(&data), "{ not json").expect("corrupt ledger");

    rpay()
        .args(["--data", &data, "history"])
        .assert()
        .success()
        .stdout(contains("No payroll records found"));

    // the next save starts a fresh ledger and keeps the broken file aside
    rpay()
        .args(["--data", &data, "run", "1", "--hours", "10", "--save"])
        .assert()
        .success()
        .stdout(contains("record #1"));

    let aside = ledger_path(&data).with_extension("json.corrupt");
    assert_eq!(fs::read_to_string(aside).expect("read aside"), "{ not json");
}

#[test]
fn test_timecard_text() {
    let data = setup_data_dir("timecard_text");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "timecard", "1"])
        .assert()
        .success()
        .stdout(contains("Time Card - Jane Doe - 2025-03-14"))
        .stdout(contains("jane@example.com"))
        .stdout(contains("Running total"))
        .stdout(contains("FICA tax (7.65%)"))
        .stdout(contains("$877.33"));
}

#[test]
fn test_timecard_pdf() {
    let data = setup_data_dir("timecard_pdf");
    init_with_ledger(&data);
    let out = temp_out("timecard_pdf", "pdf");

    rpay()
        .args(["--data", &data, "timecard", "2", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Time card for record #2 written"));

    let bytes = fs::read(&out).expect("read time card pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_timecard_unknown_record_fails() {
    let data = setup_data_dir("timecard_unknown_record_fails");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "timecard", "9"])
        .assert()
        .failure()
        .stderr(contains("No payroll record #9"));
}

#[test]
fn test_timecard_after_employee_deleted() {
    let data = setup_data_dir("timecard_after_employee_deleted");
    init_with_ledger(&data);

    rpay()
        .args(["--data", &data, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success();

    rpay()
        .args(["--data", &data, "timecard", "1"])
        .assert()
        .success()
        .stdout(contains("Time Card - Jane Doe - 2025-03-14"))
        .stdout(contains("jane@example.com").not());
}
