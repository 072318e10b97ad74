use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_employee, ledger_path, rpay, setup_data_dir, temp_out};

#[test]
fn test_run_with_overtime_and_save() {
    let data = setup_data_dir("run_with_overtime_and_save");
    init_with_employee(&data);

    rpay()
        .args([
            "--data", &data, "run", "1", "--hours", "30", "--hours", "15", "--date", "2025-03-14",
            "--save",
        ])
        .assert()
        .success()
        .stdout(contains("Payroll Summary"))
        .stdout(contains("Total Hours Worked: 45.00"))
        .stdout(contains("Overtime Hours:     5.00 x $30.00"))
        .stdout(contains("Gross Pay:          $950.00"))
        .stdout(contains("FICA Tax:           $72.68 (7.65%)"))
        .stdout(contains("Net Pay:            $877.33"))
        .stdout(contains("record #1"));

    let ledger = fs::read_to_string(ledger_path(&data)).expect("read ledger");
    assert!(ledger.contains("\"Name\": \"Jane Doe\""));
    assert!(ledger.contains("\"Date\": \"2025-03-14\""));
    assert!(ledger.contains("\"Total Hours\": 45.0"));
    assert!(ledger.contains("\"Gross Pay\": 950.0"));
    assert!(ledger.contains("\"FICA Tax\": 72.68"));
    assert!(ledger.contains("\"Net Pay\": 877.33"));
}

#[test]
fn test_run_without_overtime() {
    let data = setup_data_dir("run_without_overtime");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "1", "--hours", "22.5", "--hours", "0"])
        .assert()
        .success()
        .stdout(contains("Overtime Pay:       $0.00"))
        .stdout(contains("Gross Pay:          $450.00"))
        .stdout(contains("FICA Tax:           $34.43"))
        .stdout(contains("Net Pay:            $415.58"));

    // not saved without --save
    let ledger = fs::read_to_string(ledger_path(&data)).expect("read ledger");
    assert_eq!(ledger.trim(), "[]");
}

#[test]
fn test_run_rejects_negative_hours_argument() {
    let data = setup_data_dir("run_rejects_negative_hours_argument");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "1", "--hours", "-5"])
        .assert()
        .failure();
}

#[test]
fn test_run_unknown_employee_never_prompts() {
    let data = setup_data_dir("run_unknown_employee_never_prompts");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "7"])
        .write_stdin("10\ndone\n")
        .assert()
        .failure()
        .stderr(contains("No employee with id 7"))
        .stdout(contains("Enter hours worked").not());
}

#[test]
fn test_interactive_run_reprompts_and_saves() {
    let data = setup_data_dir("interactive_run_reprompts_and_saves");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "1", "--date", "2025-03-14"])
        // bad number, negative value, two valid entries, save, stop
        .write_stdin("abc\n-3\n30\n15\ndone\ny\nn\n")
        .assert()
        .success()
        .stdout(contains("Enter hours worked (or 'done' to finish): "))
        .stdout(contains("Invalid input. Please enter a valid number of hours."))
        .stdout(contains("running total: 45.00 h (5.00 overtime)"))
        .stdout(contains("Net Pay:            $877.33"))
        .stdout(contains("record #1"));

    let ledger = fs::read_to_string(ledger_path(&data)).expect("read ledger");
    assert!(ledger.contains("\"Net Pay\": 877.33"));
    assert!(ledger.contains("\"Entries\""));
}

#[test]
fn test_interactive_run_twice_without_saving() {
    let data = setup_data_dir("interactive_run_twice_without_saving");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "1"])
        .write_stdin("10\ndone\nn\ny\n20\ndone\nn\nn\n")
        .assert()
        .success()
        .stdout(contains("Gross Pay:          $200.00"))
        .stdout(contains("Gross Pay:          $400.00"))
        .stdout(contains("Would you like to calculate another payroll?"));

    let ledger = fs::read_to_string(ledger_path(&data)).expect("read ledger");
    assert_eq!(ledger.trim(), "[]");
}

#[test]
fn test_interactive_run_end_of_input_means_done() {
    let data = setup_data_dir("interactive_run_end_of_input_means_done");
    init_with_employee(&data);

    rpay()
        .args(["--data", &data, "run", "1"])
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(contains("Total Hours Worked: 8.00"))
        .stdout(contains("Gross Pay:          $160.00"));
}

#[test]
fn test_run_writes_timecard_pdf() {
    let data = setup_data_dir("run_writes_timecard_pdf");
    init_with_employee(&data);
    let out = temp_out("run_writes_timecard_pdf", "pdf");

    rpay()
        .args([
            "--data", &data, "run", "1", "--hours", "41", "--timecard", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Time card written to"));

    let bytes = fs::read(&out).expect("read time card");
    assert!(bytes.starts_with(b"%PDF"));
}
