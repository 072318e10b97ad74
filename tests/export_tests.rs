mod common;
use common::{init_with_ledger, rpay, setup_data_dir, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all() {
    let data = setup_data_dir("export_csv_all");
    init_with_ledger(&data);
    let out = temp_out("export_csv_all", "csv");

    rpay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("record,date,employee_id,name,hourly_wage"));
    assert!(content.contains("2025-03-14"));
    assert!(content.contains("2025-04-11"));
    assert!(content.contains("877.33"));
}

#[test]
fn test_export_json_range() {
    let data = setup_data_dir("export_json_range");
    init_with_ledger(&data);
    let out = temp_out("export_json_range", "json");

    rpay()
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out, "--range", "2025-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-03-14");
    assert_eq!(rows[0]["net_pay"], 877.33);
}

#[test]
fn test_export_xlsx() {
    let data = setup_data_dir("export_xlsx");
    init_with_ledger(&data);
    let out = temp_out("export_xlsx", "xlsx");

    rpay()
        .args(["--data", &data, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    // xlsx is a zip container
    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf() {
    let data = setup_data_dir("export_pdf");
    init_with_ledger(&data);
    let out = temp_out("export_pdf", "pdf");

    rpay()
        .args([
            "--data", &data, "export", "--format", "pdf", "--file", &out, "--employee", "1",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_requires_absolute_path() {
    let data = setup_data_dir("export_requires_absolute_path");
    init_with_ledger(&data);

    rpay()
        .args([
            "--data",
            &data,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let data = setup_data_dir("export_existing_file_needs_confirmation");
    init_with_ledger(&data);
    let out = temp_out("export_existing_file_needs_confirmation", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rpay()
        .args(["--data", &data, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rpay()
        .args([
            "--data", &data, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("877.33"));
}
