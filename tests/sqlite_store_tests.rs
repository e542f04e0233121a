mod common;
use common::{init_sqlite_roster, setup_test_store};
use rattend::core::clock::FixedClock;
use rattend::core::ledger::Ledger;
use rattend::db::log::load_log;
use rattend::db::pool::DbPool;
use rattend::models::outcome::Outcome;
use rattend::store::{Column, RecordStore, RowRef, SqliteSheet, StoreError};
use rusqlite::params;
use std::path::Path;

fn clock() -> FixedClock {
    FixedClock::at("2025-08-18 09:30:00").expect("clock")
}

#[test]
fn test_numeric_id_matches_scanned_string() {
    let mut sheet = SqliteSheet::from_pool(DbPool::in_memory().expect("db")).expect("sheet");
    sheet.insert(12345i64, "Jane", "CS").expect("insert");

    let mut ledger = Ledger::with_clock(sheet, clock());
    assert_eq!(
        ledger.process_scan("12345"),
        Outcome::EntryMarked {
            name: "Jane".into(),
            branch: "CS".into(),
            at: "2025-08-18 09:30:00".into()
        }
    );
}

#[test]
fn test_whole_real_id_matches_integer_text() {
    let mut sheet = SqliteSheet::from_pool(DbPool::in_memory().expect("db")).expect("sheet");
    sheet.insert(2025001.0f64, "Ravi", "ECE").expect("insert");

    let rows = sheet.read_all().expect("read");
    assert_eq!(rows[0].get(Column::Id), Some("2025001"));
}

#[test]
fn test_sqlite_rows_follow_rowid_order() {
    let path = setup_test_store("sqlite_order", "sqlite");
    let mut sheet = init_sqlite_roster(&path);

    let rows = sheet.read_all().expect("read");
    let ids: Vec<_> = rows.iter().map(|r| r.get(Column::Id).unwrap_or("")).collect();
    assert_eq!(ids, ["A1", "2025001", "2025002"]);
    assert_eq!(rows[0].row, RowRef(1));
}

#[test]
fn test_sqlite_write_missing_row() {
    let mut sheet = SqliteSheet::from_pool(DbPool::in_memory().expect("db")).expect("sheet");
    assert!(matches!(
        sheet.write_cell(RowRef(42), Column::EntryStatus, "Entered"),
        Err(StoreError::RowOutOfRange(42))
    ));
    assert_eq!(sheet.read_row(RowRef(42)).expect("read"), None);
}

#[test]
fn test_sqlite_transitions_land_in_audit_log() {
    let path = setup_test_store("sqlite_audit", "sqlite");
    let sheet = init_sqlite_roster(&path);

    let mut ledger = Ledger::with_clock(sheet, clock());
    assert!(matches!(
        ledger.process_scan("2025002"),
        Outcome::ExitMarked { .. }
    ));

    let mut sheet = ledger.into_store();
    let log = load_log(&sheet.pool().conn).expect("log");
    let exit = log
        .iter()
        .find(|e| e.operation == "exit")
        .expect("exit entry");
    assert_eq!(exit.target, "2025002");
    assert!(exit.message.contains("Meena (MECH) Exited"));
}

#[test]
fn test_sqlite_open_requires_existing_file() {
    let path = setup_test_store("sqlite_missing", "sqlite");
    assert!(matches!(
        SqliteSheet::open(Path::new(&path)),
        Err(StoreError::Unavailable(_))
    ));
}

#[test]
fn test_migrations_are_applied_once() {
    let path = setup_test_store("sqlite_migrations", "sqlite");
    drop(SqliteSheet::create(Path::new(&path)).expect("create"));
    let mut sheet = SqliteSheet::open(Path::new(&path)).expect("reopen");

    let applied: i64 = sheet
        .pool()
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied' AND target = ?1",
            params!["20251018_0001_attendance_id_index"],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(applied, 1);
}
