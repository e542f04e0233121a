use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `attendance` table exists.
fn attendance_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='attendance'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `attendance` table.
///
/// `ID` carries no type affinity: rosters imported from spreadsheets store
/// numeric IDs as INTEGER and the rest as TEXT, and both must survive.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            "ID"          NOT NULL,
            "Name"        TEXT NOT NULL DEFAULT '',
            "Branch"      TEXT NOT NULL DEFAULT '',
            "EntryStatus" TEXT NOT NULL DEFAULT '',
            "EntryTime"   TEXT NOT NULL DEFAULT '',
            "ExitStatus"  TEXT NOT NULL DEFAULT '',
            "ExitTime"    TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Lookup index on ID. Not UNIQUE: duplicate IDs are reported at read time
/// instead of making the whole import fail.
fn migrate_add_id_index(conn: &Connection) -> Result<()> {
    let version = "20251018_0001_attendance_id_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(r#"CREATE INDEX IF NOT EXISTS idx_attendance_id ON attendance("ID");"#)?;
    mark_applied(conn, version, "Added ID index to attendance table")?;

    success(format!(
        "Migration applied: {} → added ID index to attendance table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked whenever a SQLite roster is created or opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !attendance_table_exists(conn)? {
        create_attendance_table(conn)?;
        success("Created attendance table.");
    }

    migrate_add_id_index(conn)?;

    Ok(())
}
