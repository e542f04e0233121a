use super::{Column, RecordStore, RowRef, SheetRow, StoreError, StoreResult};
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Row, params};
use std::path::{Path, PathBuf};

const SELECT_ROWS: &str = r#"SELECT rowid, "ID", "Name", "Branch", "EntryStatus", "EntryTime", "ExitStatus", "ExitTime"
                               FROM attendance"#;

/// A roster kept in the `attendance` table of a SQLite database.
///
/// Row addresses are rowids. Scans and migrations are recorded in the
/// `log` table of the same database.
pub struct SqliteSheet {
    pool: DbPool,
    path: PathBuf,
}

impl SqliteSheet {
    /// Open an existing roster database and bring its schema up to date.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::Unavailable(format!(
                "roster database not found: {} (run `rattend init` first)",
                path.display()
            )));
        }
        Self::create(path)
    }

    /// Open or create the database file and run pending migrations.
    pub fn create(path: &Path) -> StoreResult<Self> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    /// Wrap an already-open connection (in-memory databases in tests).
    pub fn from_pool(pool: DbPool) -> StoreResult<Self> {
        run_pending_migrations(&pool.conn)?;
        Ok(Self {
            pool,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a roster row. Provisioning happens outside the kiosk; this is
    /// for import scripts and tests.
    pub fn insert(&mut self, id: impl Into<Value>, name: &str, branch: &str) -> StoreResult<RowRef> {
        let id: Value = id.into();
        self.pool.conn.execute(
            r#"INSERT INTO attendance ("ID", "Name", "Branch") VALUES (?1, ?2, ?3)"#,
            params![id, name, branch],
        )?;
        Ok(RowRef(self.pool.conn.last_insert_rowid() as usize))
    }
}

/// String form of a stored value. Whole REALs print without the fraction so
/// an ID typed as 12345 in a spreadsheet matches a scanned "12345".
fn value_to_cell(v: Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    }
}

fn map_row(row: &Row) -> rusqlite::Result<SheetRow> {
    let rowid: i64 = row.get(0)?;
    let mut out = SheetRow::new(RowRef(rowid as usize));
    for (i, column) in Column::ALL.iter().enumerate() {
        let v: Value = row.get(i + 1)?;
        out.set(*column, &value_to_cell(v));
    }
    Ok(out)
}

impl RecordStore for SqliteSheet {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn read_all(&mut self) -> StoreResult<Vec<SheetRow>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached(&format!("{SELECT_ROWS} ORDER BY rowid ASC"))?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn read_row(&mut self, row: RowRef) -> StoreResult<Option<SheetRow>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached(&format!("{SELECT_ROWS} WHERE rowid = ?1"))?;
        Ok(stmt.query_row([row.0 as i64], map_row).optional()?)
    }

    fn write_cell(&mut self, row: RowRef, column: Column, value: &str) -> StoreResult<()> {
        // Column names come from the closed Column enum, never from input.
        let sql = format!(
            r#"UPDATE attendance SET "{}" = ?1 WHERE rowid = ?2"#,
            column.header()
        );
        let changed = self.pool.conn.execute(&sql, params![value, row.0 as i64])?;
        if changed == 0 {
            return Err(StoreError::RowOutOfRange(row.0));
        }
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> StoreResult<()> {
        ttlog(&self.pool.conn, operation, target, message)?;
        Ok(())
    }
}
