#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpay() -> Command {
    cargo_bin_cmd!("rpayroll")
}

/// Create a unique, empty data directory path inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data dir and add Jane Doe (#1, $20/h)
pub fn init_with_employee(data: &str) {
    rpay()
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    rpay()
        .args([
            "--data",
            data,
            "add",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--wage",
            "20",
        ])
        .assert()
        .success();
}

/// Data dir with one employee and two saved payroll runs:
/// record #1 on 2025-03-14 (45 h), record #2 on 2025-04-11 (30 h)
pub fn init_with_ledger(data: &str) {
    init_with_employee(data);

    rpay()
        .args([
            "--data", data, "run", "1", "--hours", "30", "--hours", "15", "--date", "2025-03-14",
            "--save",
        ])
        .assert()
        .success();

    rpay()
        .args([
            "--data", data, "run", "1", "--hours", "30", "--date", "2025-04-11", "--save",
        ])
        .assert()
        .success();
}

pub fn ledger_path(data: &str) -> PathBuf {
    PathBuf::from(data).join("payroll_summary.json")
}

pub fn employees_path(data: &str) -> PathBuf {
    PathBuf::from(data).join("employees.json")
}
