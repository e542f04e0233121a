mod common;
use common::{init_csv_roster, init_sqlite_roster, rat, setup_test_store, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_json_all() {
    let store = setup_test_store("export_json_all", "csv");
    init_csv_roster(&store);
    let out = temp_out("export_json_all", "json");

    rat()
        .args(["--store", &store, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["id"], "2025002");
    assert_eq!(rows[2]["state"], "entered");
    assert_eq!(rows[2]["entry_time"], "2025-08-18 09:01:00");
}

#[test]
fn test_export_csv_filtered_by_state() {
    let store = setup_test_store("export_csv_state", "sqlite");
    drop(init_sqlite_roster(&store));
    let out = temp_out("export_csv_state", "csv");

    rat()
        .args([
            "--store",
            &store,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--state",
            "unprocessed",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,branch,state,entry_time,exit_time")
    );
    assert_eq!(lines.next(), Some("A1,Jane,CS,unprocessed,,"));
    assert_eq!(lines.next(), Some("2025001,Ravi,ECE,unprocessed,,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_xlsx_writes_file() {
    let store = setup_test_store("export_xlsx", "csv");
    init_csv_roster(&store);
    let out = temp_out("export_xlsx", "xlsx");

    rat()
        .args(["--store", &store, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    // xlsx files are zip archives
    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_nothing_to_export() {
    let store = setup_test_store("export_empty", "csv");
    init_csv_roster(&store);
    let out = temp_out("export_empty", "json");

    rat()
        .args([
            "--store", &store, "export", "--format", "json", "--file", &out, "--state",
            "completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to export."));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_force_overwrites() {
    let store = setup_test_store("export_force", "csv");
    init_csv_roster(&store);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write");

    rat()
        .args(["--store", &store, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,name,branch"));
}

#[test]
fn test_export_declined_overwrite_fails() {
    let store = setup_test_store("export_declined", "csv");
    init_csv_roster(&store);
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").expect("write");

    rat()
        .args(["--store", &store, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_requires_absolute_path() {
    let store = setup_test_store("export_relative", "csv");
    init_csv_roster(&store);

    rat()
        .args(["--store", &store, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}
